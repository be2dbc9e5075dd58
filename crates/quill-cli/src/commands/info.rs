//! Info command implementation
//!
//! Displays the fonts, Cirth modes, engines and formats this build knows.

use quill::fonts::{CirthMode, FONT_NAMES};

pub fn run() {
    println!("Quill v{}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("Fonts:");
    for name in FONT_NAMES {
        println!("  {name}");
    }
    println!();

    println!("Cirth modes:");
    for mode in CirthMode::ALL {
        let default = if mode == CirthMode::default() {
            " (default)"
        } else {
            ""
        };
        println!("  {:<17} - {:?}{}", mode.name(), mode, default);
    }
    println!();

    println!("Engines:");
    for engine in quill::ENGINES {
        println!("  {engine}");
    }
    println!();

    println!("Output Formats:");
    println!("  png               - PNG RGBA (full color with alpha)");
    println!("  ppm               - Portable Pixmap (ASCII RGB)");
    println!("  pgm               - Portable Graymap (ASCII grayscale)");
}
