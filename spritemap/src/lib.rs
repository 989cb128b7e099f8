use std::{fmt::Write as _, path::Path};

use anyhow::{Context, Result};
use itertools::Itertools;
use libledmap::{Converter, LedMaps, PixelOrder, SpriteCatalog, SPRITE_WIDTH};
use tracing::{debug, info, instrument};

/// Converts every sprite of `catalog` found under `sprite_dir` and writes the LED maps to
/// `output_name`. Nothing is written unless every sprite converts
#[instrument(skip(catalog))]
pub fn convert_sprites(
    catalog: &SpriteCatalog,
    sprite_dir: &Path,
    output_name: &Path,
    order: PixelOrder,
) -> Result<LedMaps> {
    let converter = Converter::builder()
        .sprite_dir(sprite_dir)
        .order(order)
        .build();
    debug!("Converting {} sprites", catalog.len());

    let led_maps = converter.convert_catalog(catalog)?;

    info!("Writing LED maps to {}", output_name.display());
    led_maps.clone().into_file(output_name)?;
    info!(
        "Successfully wrote LED maps to {}",
        output_name.display()
    );
    Ok(led_maps)
}

/// Reads an existing LED map file and renders every sprite as a grid of packed hex bytes
#[instrument]
pub fn inspect_led_maps(led_maps_file: &Path) -> Result<String> {
    let led_maps = LedMaps::from_file(led_maps_file)
        .with_context(|| format!("Inspect {}", led_maps_file.display()))?;
    debug!("Read {} sprites", led_maps.len());
    Ok(render_led_maps(&led_maps))
}

/// Renders LED maps as one block per sprite, 8 packed bytes per line
#[must_use]
pub fn render_led_maps(led_maps: &LedMaps) -> String {
    let mut out = String::new();
    for (name, leds) in led_maps.iter() {
        let _ = writeln!(out, "{name} ({} LEDs)", leds.len());
        for row in leds.chunks(SPRITE_WIDTH as usize) {
            let _ = writeln!(out, "  {}", row.iter().map(|b| format!("{b:02x}")).join(" "));
        }
    }
    out
}
