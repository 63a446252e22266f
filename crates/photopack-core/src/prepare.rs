use crate::error::{PackError, Result};
use crate::geometry::effective_dims;
use crate::model::{Algorithm, PhotoInput};

/// Validates every input and returns them in the order the algorithm drivers
/// should consume them (§4.2).
///
/// Sort key is `priority` descending for all three algorithms; ties are
/// broken by effective area descending for Guillotine/MaxRects or effective
/// height descending for Shelf. Remaining ties preserve original order —
/// `sort_by` is a stable sort, which is the only source of determinism when
/// two inputs are equal in priority and the tie-break key (§4.2, §9).
pub fn prepare_inputs<Payload>(
    inputs: Vec<PhotoInput<Payload>>,
    algorithm: Algorithm,
) -> Result<Vec<PhotoInput<Payload>>> {
    for input in &inputs {
        if input.size.width <= 0.0 || input.size.height <= 0.0 {
            return Err(PackError::InvalidGeometry(format!(
                "photo '{}' (id {}) has non-positive size {}x{}",
                input.size.name, input.id, input.size.width, input.size.height
            )));
        }
    }

    let mut sorted = inputs;
    sorted.sort_by(|a, b| {
        b.priority.cmp(&a.priority).then_with(|| {
            let (aw, ah) = effective_dims(&a.size, a.rotation);
            let (bw, bh) = effective_dims(&b.size, b.rotation);
            match algorithm {
                Algorithm::Shelf => bh.partial_cmp(&ah).unwrap_or(std::cmp::Ordering::Equal),
                Algorithm::Guillotine | Algorithm::MaxRects => {
                    let (aa, ba) = (aw * ah, bw * bh);
                    ba.partial_cmp(&aa).unwrap_or(std::cmp::Ordering::Equal)
                }
            }
        })
    });
    Ok(sorted)
}
