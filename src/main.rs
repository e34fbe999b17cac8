//! Render the built-in scene and write it to `out.bmp`

use anyhow::{Context, Result};
use log::info;

use polyraster::{bmp, RasterConfig, Scene};

const OUTPUT: &str = "out.bmp";

fn main() -> Result<()> {
    env_logger::init();

    let config = RasterConfig::default();
    let fb = Scene::star().render(&config)?;
    bmp::write_file(&fb, OUTPUT)
        .with_context(|| format!("writing {}", OUTPUT))?;

    info!("wrote {}x{} image to {}", fb.width(), fb.height(), OUTPUT);
    Ok(())
}
