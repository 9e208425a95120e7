//! The consolidated per-tick output handed to the renderer.

use crate::color::Rgb8;
use glam::{DQuat, EulerRot};
use serde::{Deserialize, Serialize};

/// Which of the three palette colors a decorative object takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
}

impl ColorRole {
    pub const ALL: [ColorRole; 3] = [ColorRole::Primary, ColorRole::Secondary, ColorRole::Accent];
}

/// Visual state for one rendered frame.
///
/// Colors are the blended palette roles; `yaw`/`pitch` sway the whole
/// backdrop group and `spin` turns the lead cloud, all in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameState {
    pub primary: Rgb8,
    pub secondary: Rgb8,
    pub accent: Rgb8,
    pub yaw: f64,
    pub pitch: f64,
    pub spin: f64,
}

impl FrameState {
    /// Color assigned to `role`.
    pub fn color(&self, role: ColorRole) -> Rgb8 {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::Secondary => self.secondary,
            ColorRole::Accent => self.accent,
        }
    }

    /// Colors in `[primary, secondary, accent]` order.
    pub fn colors(&self) -> [Rgb8; 3] {
        [self.primary, self.secondary, self.accent]
    }

    /// Group transform: rotation about X by `pitch`, then Y by `yaw`.
    pub fn group_rotation(&self) -> DQuat {
        DQuat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, 0.0)
    }

    /// Lead-cloud transform: rotation about +Y by `spin`.
    pub fn spin_rotation(&self) -> DQuat {
        DQuat::from_rotation_y(self.spin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn sample() -> FrameState {
        FrameState {
            primary: Rgb8::new(1, 2, 3),
            secondary: Rgb8::new(4, 5, 6),
            accent: Rgb8::new(7, 8, 9),
            yaw: 0.25,
            pitch: 0.0,
            spin: -0.6,
        }
    }

    #[test]
    fn color_selects_role() {
        let f = sample();
        assert_eq!(f.color(ColorRole::Primary), Rgb8::new(1, 2, 3));
        assert_eq!(f.color(ColorRole::Secondary), Rgb8::new(4, 5, 6));
        assert_eq!(f.color(ColorRole::Accent), Rgb8::new(7, 8, 9));
    }

    #[test]
    fn colors_follow_role_order() {
        let f = sample();
        let by_role: Vec<Rgb8> = ColorRole::ALL.iter().map(|r| f.color(*r)).collect();
        assert_eq!(by_role, f.colors().to_vec());
    }

    #[test]
    fn group_rotation_with_pure_yaw_turns_about_y() {
        let q = sample().group_rotation();
        let expected = DQuat::from_rotation_y(0.25);
        assert!(q.abs_diff_eq(expected, 1e-12), "{q:?} vs {expected:?}");
    }

    #[test]
    fn spin_rotation_keeps_up_axis() {
        let up = sample().spin_rotation() * DVec3::Y;
        assert!(up.abs_diff_eq(DVec3::Y, 1e-12));
    }

    #[test]
    fn json_uses_hex_colors() {
        let v = serde_json::to_value(sample()).unwrap();
        assert_eq!(v["primary"], "#010203");
        assert_eq!(v["spin"], -0.6);
    }

    #[test]
    fn color_role_serializes_lowercase() {
        let s = serde_json::to_string(&ColorRole::Accent).unwrap();
        assert_eq!(s, "\"accent\"");
    }
}
