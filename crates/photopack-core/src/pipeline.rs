use crate::config::PageConfig;
use crate::error::Result;
use crate::geometry::{effective_dims, printable_area, FreeRect};
use crate::model::{Algorithm, PhotoInput, Placement};
use crate::packer::guillotine::GuillotineStore;
use crate::packer::maxrects::MaxRectsStore;
use crate::packer::{shelf, RectStore};
use crate::prepare::prepare_inputs;

/// The core's single entry point (§6.1).
///
/// Validates `config`, sorts `inputs` per §4.2, dispatches to the selected
/// algorithm, and returns placements in the order the driver emitted them.
/// Never panics on an unplaceable item — those are silently omitted from
/// the result (§4.8).
pub fn pack<Payload: Clone>(
    inputs: Vec<PhotoInput<Payload>>,
    config: PageConfig,
    algorithm: Algorithm,
) -> Result<Vec<Placement<Payload>>> {
    config.validate()?;
    let printable = printable_area(&config)?;
    let sorted = prepare_inputs(inputs, algorithm)?;

    let placements = match algorithm {
        Algorithm::Guillotine => run_store_driver::<GuillotineStore, _>(sorted, &config, printable),
        Algorithm::MaxRects => run_store_driver::<MaxRectsStore, _>(sorted, &config, printable),
        Algorithm::Shelf => shelf::run(sorted, &config, printable),
    };

    Ok(placements)
}

/// Drives Guillotine and MaxRects, which share the same per-page loop
/// shape (§4.4, §4.6) and differ only in how their `RectStore` finds a fit
/// and splits — hence the shared generic driver rather than duplicated
/// page/retry bookkeeping in each algorithm's module.
fn run_store_driver<S: RectStore, Payload: Clone>(
    sorted: Vec<PhotoInput<Payload>>,
    config: &PageConfig,
    printable: FreeRect,
) -> Vec<Placement<Payload>> {
    let mut placements = Vec::with_capacity(sorted.len());
    let mut page_index = 0usize;
    let mut store = S::new(printable);

    for input in sorted {
        let (ew, eh) = effective_dims(&input.size, input.rotation);
        let (rw, rh) = (ew + config.spacing, eh + config.spacing);

        // An item whose footprint exceeds the whole printable area can never
        // fit any page — including a freshly reset one — so it is dropped
        // up front rather than spent on a doomed retry (§4.8 drop guard).
        if rw > printable.width || rh > printable.height {
            continue;
        }

        let placed_at = match store.find_fit(rw, rh) {
            Some((idx, rect)) => {
                store.place(idx, rw, rh);
                Some((rect.x, rect.y, page_index))
            }
            None if config.multi_page => {
                // The guard above guarantees this retry always succeeds: a
                // fresh store is a single free rect equal to the printable
                // area, which the item is already known to fit.
                page_index += 1;
                store = S::new(printable);
                store.find_fit(rw, rh).map(|(idx, rect)| {
                    store.place(idx, rw, rh);
                    (rect.x, rect.y, page_index)
                })
            }
            None => None,
        };

        if let Some((x, y, page_index)) = placed_at {
            placements.push(Placement {
                id: input.id,
                payload: input.payload,
                size: input.size,
                rotation: input.rotation,
                x,
                y,
                effective_width: ew,
                effective_height: eh,
                page_index,
            });
        }
    }

    placements
}
