//! Classroom Ranking Example
//!
//! A handful of students report light and temperature from their seats at
//! 10:00. The engine scores each seat and recommends the best ones.
//!
//! ## What You'll Learn
//!
//! - Building an engine for the reference classroom
//! - Submitting readings and handling rejected ones
//! - Reading the ranked recommendations and the seat heat map
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_classroom_ranking
//! ```

use comfort_core::{ComfortEngine, ComfortResult, Position, RoomConfig};

fn main() -> ComfortResult<()> {
    println!("RoomComfort Classroom Ranking Example");
    println!("=====================================\n");

    let mut engine = ComfortEngine::new(RoomConfig::classroom())?;
    let (columns, rows) = engine.grid_dimensions();
    println!("Room: {columns} columns x {rows} rows, ACs at seats 6 and 10\n");

    // (column, row, lux, rating, comment)
    let reports = [
        (0, 0, 480.0, 3, None),
        (1, 0, 520.0, 4, Some("right under the AC")),
        (2, 2, 310.0, 3, Some("a bit dark")),
        (4, 1, 650.0, 4, None),
        (5, 4, 150.0, 5, Some("sunny and hot")),
        (3, 3, 500.0, 2, None),
    ];

    println!("Submitting readings for 10:00:");
    for (column, row, lux, rating, comment) in reports {
        let position = Position::new(column, row);
        engine.submit_reading(position, "10:00", lux, rating, comment.map(String::from))?;
        println!("  {position}: {lux:>5.0} lux, rating {rating}");
    }

    // Rejected requests leave the store untouched
    println!("\nInvalid submissions:");
    let rejected = [
        engine.submit_reading(Position::new(0, 1), "10:00", -20.0, 3, None),
        engine.submit_reading(Position::new(0, 1), "10:00", 400.0, 7, None),
        engine.submit_reading(Position::new(9, 9), "10:00", 400.0, 3, None),
        engine.submit_reading(Position::new(0, 1), "18:00", 400.0, 3, None),
    ];
    for result in rejected {
        if let Err(e) = result {
            println!("  rejected: {e}");
        }
    }

    println!("\nTop seats at 10:00:");
    for (rank, rec) in engine.default_recommendations("10:00")?.iter().enumerate() {
        println!(
            "  {}. seat {:>2} {}  score {:5.1}  {}",
            rank + 1,
            rec.id,
            rec.position,
            rec.score,
            rec.category
        );
    }

    println!("\nHeat map (seat:colour):");
    let cells = engine.heatmap("10:00")?;
    for row in 0..rows {
        let line: Vec<String> = (0..columns)
            .map(|column| {
                let cell = &cells[usize::from(column) * usize::from(rows) + usize::from(row)];
                format!("{:>2}:{:<6}", cell.id, cell.assessment.category.color())
            })
            .collect();
        println!("  {}", line.join(" "));
    }

    let assessment = engine.score_and_color(Position::new(0, 1), "10:00")?;
    println!("\nSeat 2 at 10:00: {}", assessment.category);

    let stats = engine.stats();
    println!(
        "\n{} seats with data, {} readings in total",
        stats.positions_with_data, stats.total_readings
    );
    Ok(())
}
