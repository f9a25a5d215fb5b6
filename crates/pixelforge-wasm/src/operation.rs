//! Edit operation bindings.
//!
//! Operations arrive from TypeScript as plain objects tagged by `op`, for
//! example `{ op: "levels", shadow: 20, mid: 110, highlight: 240 }`, and
//! are decoded with `serde_wasm_bindgen`.

use pixelforge_core::{EditResult, Operation};
use wasm_bindgen::prelude::*;

use crate::error::to_js_error;
use crate::types::JsImage;

/// Apply one operation to the left `percent` of `image`.
///
/// Pass `100` to transform the whole image. Only operations with preview
/// support accept other values.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const sepia = apply_operation(image, { op: "sepia" }, 50);
/// const darker = apply_operation(image, { op: "brightness", delta: -30 }, 100);
/// ```
#[wasm_bindgen]
pub fn apply_operation(
    image: &JsImage,
    operation: JsValue,
    percent: f64,
) -> Result<JsImage, JsValue> {
    let operation: Operation = serde_wasm_bindgen::from_value(operation)
        .map_err(|e| to_js_error(format!("Invalid operation: {}", e)))?;
    run(image, &operation, percent).map_err(to_js_error)
}

/// Apply a list of operations in order, each to the whole image.
#[wasm_bindgen]
pub fn apply_pipeline(image: &JsImage, operations: JsValue) -> Result<JsImage, JsValue> {
    let operations: Vec<Operation> = serde_wasm_bindgen::from_value(operations)
        .map_err(|e| to_js_error(format!("Invalid operation list: {}", e)))?;
    run_all(image, &operations).map_err(to_js_error)
}

/// Whether the operation named by `op` can be previewed with a split.
#[wasm_bindgen]
pub fn supports_preview(operation: JsValue) -> Result<bool, JsValue> {
    let operation: Operation = serde_wasm_bindgen::from_value(operation)
        .map_err(|e| to_js_error(format!("Invalid operation: {}", e)))?;
    Ok(operation.supports_preview())
}

fn run(image: &JsImage, operation: &Operation, percent: f64) -> EditResult<JsImage> {
    let grid = image.to_grid()?;
    operation
        .apply_with_preview(&grid, percent)
        .map(JsImage::from_grid)
}

fn run_all(image: &JsImage, operations: &[Operation]) -> EditResult<JsImage> {
    let mut grid = image.to_grid()?;
    for operation in operations {
        grid = operation.apply(&grid)?;
    }
    Ok(JsImage::from_grid(grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelforge_core::FlipAxis;

    fn sample() -> JsImage {
        JsImage::new(2, 1, vec![10, 20, 30, 200, 210, 220])
    }

    #[test]
    fn test_run_full_image() {
        let out = run(
            &sample(),
            &Operation::Flip {
                axis: FlipAxis::Horizontal,
            },
            100.0,
        )
        .unwrap();
        assert_eq!(out.pixels(), vec![200, 210, 220, 10, 20, 30]);
    }

    #[test]
    fn test_run_split_preview_widens_output() {
        let out = run(&sample(), &Operation::Greyscale, 50.0).unwrap();
        assert_eq!(out.width(), 1 + 3 + 1);
        assert_eq!(out.height(), 1);
    }

    #[test]
    fn test_run_rejects_split_without_preview() {
        assert!(run(&sample(), &Operation::Brightness { delta: 5 }, 50.0).is_err());
    }

    #[test]
    fn test_run_all_in_order() {
        let ops = [
            Operation::Brightness { delta: 10 },
            Operation::Flip {
                axis: FlipAxis::Horizontal,
            },
        ];
        let out = run_all(&sample(), &ops).unwrap();
        assert_eq!(out.pixels(), vec![210, 220, 230, 20, 30, 40]);
    }

    #[test]
    fn test_run_all_empty_is_identity() {
        assert_eq!(run_all(&sample(), &[]).unwrap().pixels(), sample().pixels());
    }
}
