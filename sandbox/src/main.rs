// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// gpudesc sandbox
// Builds the descriptors a small deferred renderer would need and logs them.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use gpudesc_core::{BufferViewRange, BuilderSettings, Format, ResourceBuilder, ViewRange};

/// Command-line arguments of the sandbox.
#[derive(Parser)]
#[command(version, about = "Builds and logs a set of D3D12 resource descriptors")]
struct Args {
    /// RON file with builder settings
    #[arg(long, short)]
    settings: Option<PathBuf>,

    /// Back buffer width in pixels
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Back buffer height in pixels
    #[arg(long, default_value_t = 1080)]
    height: u32,
}

fn parse_settings(source: &str) -> Result<BuilderSettings> {
    ron::from_str(source).context("Invalid builder settings")
}

fn load_settings(path: &Path) -> Result<BuilderSettings> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;
    parse_settings(&source)
}

fn color_target(builder: &mut ResourceBuilder, width: u32, height: u32) {
    builder.texture_2d(u64::from(width), height, Format::R8G8B8A8Typeless, 1, 1);
    log::info!("Color target: {:?}", builder.as_color_target(false));
    log::info!(
        "Color target RTV: {:?}",
        builder.as_color_target_view(Format::R8G8B8A8UnormSrgb, 0)
    );
    log::info!(
        "Color target SRV: {:?}",
        builder.as_shader_resource_view(Format::R8G8B8A8Unorm, 0, 1, 0.0)
    );
}

fn depth_buffer(builder: &mut ResourceBuilder, width: u32, height: u32) {
    builder.texture_2d(u64::from(width), height, Format::R32Typeless, 1, 1);
    log::info!("Depth buffer: {:?}", builder.as_depth_target(true));
    log::info!(
        "Depth buffer DSV: {:?}",
        builder.as_depth_stencil_view(Format::D32Float, 0)
    );
    log::info!(
        "Depth buffer SRV: {:?}",
        builder.as_shader_resource_view(Format::R32Float, 0, 1, 0.0)
    );
}

fn shadow_cascades(builder: &mut ResourceBuilder) {
    const CASCADES: u16 = 4;

    builder.texture_2d(2048, 2048, Format::R32Typeless, CASCADES, 1);
    log::info!("Shadow cascades: {:?}", builder.as_depth_target(true));

    for cascade in 0..CASCADES {
        let range = ViewRange::new(Format::D32Float).slices(cascade, cascade + 1);
        log::info!(
            "Cascade {cascade} DSV: {:?}",
            builder.as_depth_stencil_view_array(&range)
        );
    }
    log::info!(
        "Shadow cascades SRV: {:?}",
        builder.as_shader_resource_view_array(&ViewRange::new(Format::R32Float))
    );
}

fn material_table(builder: &mut ResourceBuilder) {
    const MATERIALS: u32 = 256;
    const MATERIAL_STRIDE: u32 = 64;

    builder.buffer(u64::from(MATERIALS * MATERIAL_STRIDE));
    log::info!("Material table: {:?}", builder.desc());
    log::info!(
        "Material table SRV: {:?}",
        builder.as_buffer_resource_view(&BufferViewRange::structured(
            0,
            MATERIALS,
            MATERIAL_STRIDE
        ))
    );
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let settings = match &args.settings {
        Some(path) => load_settings(path)?,
        None => BuilderSettings::default(),
    };
    log::info!("Builder settings: {settings:?}");

    let mut builder = ResourceBuilder::with_settings(settings);
    color_target(&mut builder, args.width, args.height);
    depth_buffer(&mut builder, args.width, args.height);
    shadow_cascades(&mut builder);
    material_table(&mut builder);

    Ok(())
}
