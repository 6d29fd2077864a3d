//! Linear RGB / CIE XYZ conversion with a D50 white point.
//!
//! Print workflows reference the ICC profile connection space, which is
//! D50-adapted, so the matrices here are the Bradford-adapted sRGB pair
//! rather than the native D65 ones. Both directions are plain 3x3
//! multiplies over linear-light values with Y normalized to 1.

/// D50 reference white (ICC PCS), Y normalized to 1.
pub const D50_WHITE: [f64; 3] = [0.96422, 1.0, 0.82521];

/// Linear sRGB -> XYZ (D50), Bradford-adapted.
const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.436_074_7, 0.385_064_9, 0.143_080_4],
    [0.222_504_5, 0.716_878_6, 0.060_616_9],
    [0.013_932_2, 0.097_104_5, 0.714_173_3],
];

/// XYZ (D50) -> linear sRGB, inverse of [`RGB_TO_XYZ`].
const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.133_856_1, -1.616_866_7, -0.490_614_6],
    [-0.978_768_4, 1.916_141_5, 0.033_454_0],
    [0.071_945_3, -0.228_991_4, 1.405_242_7],
];

#[inline]
fn mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Converts linear sRGB to XYZ (D50).
///
/// Input must be linear light (EOTF already applied).
#[inline]
pub fn linear_rgb_to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    mul(&RGB_TO_XYZ, rgb)
}

/// Converts XYZ (D50) to linear sRGB.
///
/// Output is linear light and may fall outside [0, 1] for XYZ values
/// outside the sRGB gamut; callers clamp at the 8-bit boundary.
#[inline]
pub fn xyz_to_linear_rgb(xyz: [f64; 3]) -> [f64; 3] {
    mul(&XYZ_TO_RGB, xyz)
}
