//! `pointpicker` demo: drive the picker over image layers and save the result

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tiny_skia::Pixmap;

use pointpicker::render::image::{load_pixmap, save_png};
use pointpicker::widget::{HostEvent, PointerEvent, dispatch};
use pointpicker::{
    Allocation, Document, Layer, PickerConfig, PickerWidget, Point, PointPicker, Size, Workspace,
};

/// Pick a point over a thumbnail of stacked image layers
#[derive(Parser, Debug)]
#[command(name = "pointpicker", version)]
struct Cli {
    /// Layer image, bottom to top: PATH[@X,Y][:OPACITY]
    #[arg(long = "layer", value_parser = parse_layer_arg, required = true)]
    layers: Vec<LayerArg>,

    /// Logical image size (WxH); defaults to the layers' bounding size
    #[arg(long, value_parser = parse_size)]
    image_size: Option<Size>,

    /// Widget size (WxH); defaults to the configured preferred size
    #[arg(long, value_parser = parse_size)]
    widget_size: Option<Size>,

    /// Pointer path X,Y: first point presses, last releases
    #[arg(long = "drag", value_parser = parse_point)]
    drag: Vec<Point>,

    /// Where to write the painted widget as PNG
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Config file; defaults to the user config location
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Debug)]
struct LayerArg {
    path: PathBuf,
    offset: (i32, i32),
    opacity: f32,
}

fn parse_pair<T: std::str::FromStr>(s: &str, sep: char) -> Result<(T, T)> {
    let (a, b) = s
        .split_once(sep)
        .with_context(|| format!("expected two values separated by '{sep}', got '{s}'"))?;
    match (a.trim().parse(), b.trim().parse()) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        _ => bail!("invalid number in '{s}'"),
    }
}

fn parse_size(s: &str) -> Result<Size> {
    let (width, height) = parse_pair::<u32>(s, 'x')?;
    if width == 0 || height == 0 {
        bail!("size must be non-zero, got '{s}'");
    }
    Ok(Size::new(width, height))
}

fn parse_point(s: &str) -> Result<Point> {
    let (x, y) = parse_pair::<f64>(s, ',')?;
    Ok(Point::new(x, y))
}

fn parse_layer_arg(s: &str) -> Result<LayerArg> {
    let mut rest = s;
    let mut opacity = 1.0;
    if let Some((head, tail)) = rest.rsplit_once(':')
        && let Ok(value) = tail.parse::<f32>()
    {
        if !(0.0..=1.0).contains(&value) {
            bail!("opacity must be within 0..1, got {value}");
        }
        opacity = value;
        rest = head;
    }

    let mut offset = (0, 0);
    if let Some((head, tail)) = rest.rsplit_once('@')
        && let Ok(pair) = parse_pair::<i32>(tail, ',')
    {
        offset = pair;
        rest = head;
    }

    if rest.is_empty() {
        bail!("missing layer path in '{s}'");
    }
    Ok(LayerArg {
        path: PathBuf::from(rest),
        offset,
        opacity,
    })
}

fn build_document(args: &[LayerArg], image_size: Option<Size>) -> Result<Document> {
    let layers = args
        .iter()
        .map(|arg| {
            let surface = load_pixmap(&arg.path)?;
            let name = arg
                .path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            Ok(Layer::new(name, surface)
                .with_offset(arg.offset.0, arg.offset.1)
                .with_opacity(arg.opacity))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut document = Document::from_layers(layers);
    if let Some(size) = image_size {
        document.set_size(size);
    }
    Ok(document)
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => PickerConfig::load_from(path)?,
        None => PickerConfig::load(),
    };

    let document = build_document(&cli.layers, cli.image_size)?;
    let image_size = document.image_size();
    log::info!(
        "Loaded {} layers, image size {}x{}",
        document.layers().len(),
        image_size.width,
        image_size.height
    );

    let mut picker = PointPicker::with_config(document, config);
    picker.connect_position_changed(|| log::debug!("Position changed"));

    let requested = picker.on_size_request();
    let widget_size = cli
        .widget_size
        .unwrap_or_else(|| Size::new(requested.width, requested.height));

    let mut surface = Pixmap::new(widget_size.width, widget_size.height)
        .context("Failed to allocate widget surface")?;

    let mut events = vec![HostEvent::SizeAllocate(Allocation::from_size(widget_size))];
    if let Some((first, rest)) = cli.drag.split_first() {
        events.push(HostEvent::PointerDown(PointerEvent::left(first.x, first.y)));
        let (last, moves) = rest.split_last().unwrap_or((first, &[][..]));
        events.extend(moves.iter().map(|pt| HostEvent::PointerMove(*pt)));
        events.push(HostEvent::PointerUp(PointerEvent::left(last.x, last.y)));
    }
    events.push(HostEvent::Paint);

    for event in events {
        dispatch(&mut picker, event, &mut surface);
    }

    let position = picker.position();
    println!("{} {}", position.x, position.y);

    if let Some(output) = &cli.output {
        save_png(&surface, output)?;
        log::info!("Wrote {}", output.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    run(Cli::parse())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_layer_arg() {
        let arg = parse_layer_arg("bg.png").unwrap();
        assert_eq!(arg.path, PathBuf::from("bg.png"));
        assert_eq!(arg.offset, (0, 0));
        assert_eq!(arg.opacity, 1.0);

        let arg = parse_layer_arg("dir/ink.png@10,-4:0.5").unwrap();
        assert_eq!(arg.path, PathBuf::from("dir/ink.png"));
        assert_eq!(arg.offset, (10, -4));
        assert_eq!(arg.opacity, 0.5);

        assert!(parse_layer_arg("ink.png:1.5").is_err());
        assert!(parse_layer_arg(":0.5").is_err());
    }

    #[test]
    fn test_parse_size_and_point() {
        assert_eq!(parse_size("64x48").unwrap(), Size::new(64, 48));
        assert!(parse_size("0x48").is_err());
        assert!(parse_size("64").is_err());
        assert_eq!(parse_point("1.5, -2").unwrap(), Point::new(1.5, -2.0));
    }

    #[test]
    fn test_cli_requires_layer() {
        assert!(Cli::try_parse_from(["pointpicker"]).is_err());
        let cli = Cli::try_parse_from([
            "pointpicker",
            "--layer",
            "a.png",
            "--drag",
            "10,10",
            "--drag",
            "20,30",
            "--widget-size",
            "80x60",
        ])
        .unwrap();
        assert_eq!(cli.drag.len(), 2);
        assert_eq!(cli.widget_size, Some(Size::new(80, 60)));
    }
}
