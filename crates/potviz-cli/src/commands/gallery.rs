use crate::cli::GalleryArgs;
use crate::config::DefaultsConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use potviz::render::export::OutputFormat;
use potviz::render::style::RenderStyle;
use potviz::workflows::gallery::render_gallery;
use potviz::workflows::progress::ProgressReporter;
use std::path::PathBuf;
use tracing::info;

pub fn run(
    args: GalleryArgs,
    style: &RenderStyle,
    defaults: &DefaultsConfig,
) -> Result<Vec<PathBuf>> {
    let output_dir = args.output_dir.unwrap_or_else(|| defaults.output_dir.clone());
    let format = args.format.map(OutputFormat::from).unwrap_or(defaults.format);

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Rendering gallery into {}...", output_dir.display());
    info!("Invoking the gallery workflow...");
    let written = render_gallery(&output_dir, style, format, &reporter)?;

    println!("Wrote {} figure(s).", written.len());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ImageFormat;
    use tempfile::tempdir;

    #[test]
    fn gallery_command_writes_svg_figures_into_requested_directory() {
        let dir = tempdir().unwrap();
        let args = GalleryArgs {
            output_dir: Some(dir.path().join("out")),
            format: Some(ImageFormat::Svg),
        };
        let written = run(args, &RenderStyle::default(), &DefaultsConfig::default()).unwrap();

        assert_eq!(written.len(), 13);
        assert!(written.iter().all(|p| p.extension().unwrap() == "svg"));
        assert!(dir.path().join("out").join("spring_z_centerline.svg").is_file());
    }
}
