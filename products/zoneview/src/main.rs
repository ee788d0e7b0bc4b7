use {
    std::{collections::HashMap, env, fs, process, sync::Arc},
    zonecam_camera::{Camera, StillCamera},
    zonecam_image::ImageMime,
    zonecam_zone::ZoneCamera,
};

const COMPONENT_NAME: &str = "zoneview";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let (Some(image_path), Some(config_path), Some(output_path)) =
        (args.next(), args.next(), args.next())
    else {
        eprintln!("usage: zoneview <input-image> <attributes.json> <output-image>");
        process::exit(2);
    };

    log::info!("loading still frame from {image_path}");
    let mime = ImageMime::from_extension(&image_path)?;
    let upstream: Arc<dyn Camera> = Arc::new(StillCamera::from_file(&image_path, mime)?);

    log::info!("reading attributes from {config_path}");
    let attrs: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(&config_path)?)?;

    let (required, _optional) = ZoneCamera::validate(&attrs)?;
    let mut dependencies = HashMap::new();
    for name in required {
        dependencies.insert(name, Arc::clone(&upstream));
    }

    let zone_camera = ZoneCamera::new(COMPONENT_NAME, &attrs, &dependencies)?;

    log::info!("rendering annotated frame");
    let annotated = zone_camera
        .annotated_image(Some(ImageMime::from_extension(&output_path)?))
        .await?;

    fs::write(&output_path, &annotated.bytes)?;
    log::info!("wrote {output_path} ({})", annotated.mime.as_str());

    Ok(())
}
