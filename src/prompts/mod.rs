pub mod controller;
pub mod dtos;
pub mod errors;
pub mod service;
pub mod structs;

pub static NEGATIVE_DEFAULT: &str =
    "low-res, blurry, overexposed, underexposed, watermark, logo, extra limbs, distorted anatomy";
