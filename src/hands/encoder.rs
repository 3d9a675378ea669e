//! JSON wire encoding for hand frames
//!
//! A frame is encoded as an array of landmark objects in landmark order,
//! each with exactly the fields `x`, `y`, `z`, `visibility` and `presence`.

use super::models::HandFrame;
use crate::error::Result;

/// Media type of an encoded frame
pub const CONTENT_TYPE: &str = "application/json";

/// Encode a frame to its JSON wire form
///
/// Frames are published as the detector produced them. A non-finite
/// coordinate or score (NaN, infinity) is written as `null`, since JSON has
/// no representation for it.
pub fn encode_frame(frame: &HandFrame) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(frame)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hands::models::Landmark;
    use serde_json::Value;

    #[test]
    fn test_encode_field_names_and_order() {
        let frame = HandFrame::new(vec![
            Landmark::new(0.5, 0.25, -0.125, 1.0, 0.75),
            Landmark::new(0.0, 1.0, 0.0, 0.0, 0.5),
        ]);

        let encoded = String::from_utf8(encode_frame(&frame).unwrap()).unwrap();
        assert_eq!(
            encoded,
            r#"[{"x":0.5,"y":0.25,"z":-0.125,"visibility":1.0,"presence":0.75},{"x":0.0,"y":1.0,"z":0.0,"visibility":0.0,"presence":0.5}]"#
        );
    }

    #[test]
    fn test_encode_non_finite_values_as_null() {
        let frame = HandFrame::new(vec![Landmark::new(f32::NAN, 0.5, f32::INFINITY, 1.0, 1.0)]);

        let value: Value = serde_json::from_slice(&encode_frame(&frame).unwrap()).unwrap();
        assert_eq!(value[0]["x"], Value::Null);
        assert_eq!(value[0]["y"], serde_json::json!(0.5));
        assert_eq!(value[0]["z"], Value::Null);
    }

    #[test]
    fn test_encode_empty_frame() {
        let frame = HandFrame::new(Vec::new());
        assert_eq!(encode_frame(&frame).unwrap(), b"[]");
    }

    #[test]
    fn test_encoded_values_decode_to_original() {
        let landmarks: Vec<Landmark> = (0..21)
            .map(|i| {
                let v = i as f32 / 21.0;
                Landmark::new(v, 1.0 - v, v * 0.1, 0.9, 0.8)
            })
            .collect();
        let frame = HandFrame::new(landmarks.clone());

        let value: Value = serde_json::from_slice(&encode_frame(&frame).unwrap()).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 21);
        for (item, landmark) in items.iter().zip(&landmarks) {
            assert_eq!(item.as_object().unwrap().len(), 5);
            let decoded: Landmark = serde_json::from_value(item.clone()).unwrap();
            assert_eq!(&decoded, landmark);
        }
    }
}
