//! Vertex colors

/// RGBA color type
pub type CellColor = [f32; 4];

pub const WHITE: CellColor = [1.0, 1.0, 1.0, 1.0];
pub const RED: CellColor = [1.0, 0.0, 0.0, 1.0];
pub const GREEN: CellColor = [0.0, 1.0, 0.0, 1.0];
pub const BLUE: CellColor = [0.0, 0.0, 1.0, 1.0];
pub const YELLOW: CellColor = [1.0, 1.0, 0.0, 1.0];

/// Swatches offered to editors and used by random terrain
pub const DEFAULT_PALETTE: [CellColor; 4] = [RED, GREEN, BLUE, YELLOW];

/// Build an opaque color from 8-bit channels
pub fn rgb8(r: u8, g: u8, b: u8) -> CellColor {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_is_opaque() {
        for color in DEFAULT_PALETTE {
            assert_eq!(color[3], 1.0);
        }
        assert_eq!(WHITE, [1.0; 4]);
    }

    #[test]
    fn test_rgb8() {
        assert_eq!(rgb8(255, 0, 255), [1.0, 0.0, 1.0, 1.0]);
        assert_eq!(rgb8(0, 0, 0), [0.0, 0.0, 0.0, 1.0]);
    }
}
