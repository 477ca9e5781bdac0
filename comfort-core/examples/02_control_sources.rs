//! Control Sources Example
//!
//! Shows how switching climate-control sources changes seat scores without
//! anyone resubmitting, and how a heating source differs from a cooling one.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_control_sources
//! ```

use comfort_core::{ComfortEngine, ComfortResult, ControlSourceConfig, Position, RoomConfig};

fn main() -> ComfortResult<()> {
    println!("RoomComfort Control Sources Example");
    println!("===================================\n");

    let config = RoomConfig::builder()
        .control_source(ControlSourceConfig::cooling(1, 1, 0))
        .control_source(ControlSourceConfig::heating(2, 4, 4).inactive())
        .build()?;
    let mut engine = ComfortEngine::new(config)?;

    let seats = [Position::new(1, 0), Position::new(2, 2), Position::new(4, 4)];
    for seat in seats {
        engine.submit_reading(seat, "13:00", 500.0, 3, None)?;
    }

    let show = |engine: &ComfortEngine<_>, label: &str| -> ComfortResult<()> {
        println!("{label}");
        for source in engine.list_control_sources() {
            println!(
                "  source {} at {} effect {:+.1} {}",
                source.id,
                source.position,
                source.effect,
                if source.is_active() { "on" } else { "off" }
            );
        }
        for seat in seats {
            if let Some(terms) = engine.breakdown(seat, "13:00")? {
                println!(
                    "  seat {} influence {:+.3} effective {:.3} score {:5.1}",
                    seat, terms.influence, terms.effective_temp, terms.score
                );
            }
        }
        println!();
        Ok(())
    };

    show(&engine, "Cooling source on, heater off:")?;

    engine.set_control_source_state(2, true)?;
    show(&engine, "Heater switched on:")?;

    engine.set_control_source_state(1, false)?;
    engine.set_control_source_state(2, false)?;
    show(&engine, "Everything off:")?;

    Ok(())
}
