use alertkit_core::{Color, Rect, Size};
use alertkit_style::{ActionStyle, AlertTone, BuiltinIcons, IconPathProvider};

fn hex(color: Color) -> String {
    let [r, g, b, _] = color.to_rgba8();
    format!("#{r:02X}{g:02X}{b:02X}")
}

fn label(tone: AlertTone) -> &'static str {
    match tone {
        AlertTone::Normal => "Normal",
        AlertTone::Success { .. } => "Success",
        AlertTone::Information { .. } => "Information",
        AlertTone::Warning { .. } => "Warning",
        AlertTone::Error { .. } => "Error",
        AlertTone::Edit { .. } => "Edit",
        AlertTone::Authorize { .. } => "Authorize",
    }
}

fn main() {
    env_logger::init();
    log::info!("Starting tone gallery");

    let small_box = Size {
        width: 24.0,
        height: 24.0,
    };
    let large_box = Size {
        width: 48.0,
        height: 48.0,
    };

    println!("tone         text     button   icon     glyph 24x24  glyph 48x48");
    for tone in AlertTone::all(true) {
        let palette = tone.palette();
        let small = BuiltinIcons.icon_path(tone, small_box);
        let large = BuiltinIcons.icon_path(tone, large_box);
        println!(
            "{:<12} {}  {}  {}  {:>2} segments  {:>2} segments",
            label(tone),
            hex(palette.text),
            hex(palette.button_background),
            hex(palette.icon),
            small.segments().len(),
            large.segments().len(),
        );
    }

    println!();
    let frame = Rect {
        x: 16.0,
        y: 16.0,
        w: 32.0,
        h: 32.0,
    };
    let layer = AlertTone::Warning { icon: true }.icon_layer(frame, &BuiltinIcons);
    println!(
        "warning layer: frame {:?}, fill {}, {} segments",
        layer.frame,
        hex(layer.fill_color),
        layer.path.segments().len(),
    );

    println!();
    for style in ActionStyle::ALL {
        println!("action {:?} serializes as code {}", style, style.code());
    }
}
