use console::Style;
use zoomslider_core::comparison::ComparisonView;
use zoomslider_core::pane::Pane;
use zoomslider_core::settings::Settings;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
        }
    }
}

pub fn print_view_summary(view: &ComparisonView, settings: &Settings, split: f32) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("ZoomSlider"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(10)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Sizing"),
        s.method.apply_to(settings.sizing)
    );
    match settings.raster_resolution {
        Some(n) => println!(
            "  {:<14}{}",
            s.label.apply_to("Raster"),
            s.value.apply_to(format!("{n} px"))
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Raster"),
            s.disabled.apply_to("source resolution")
        ),
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("View"),
        s.value.apply_to(view.size)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Divider"),
        s.value.apply_to(format!(
            "column {} ({:.0}%)",
            view.divider_column(split),
            split.clamp(0.0, 1.0) * 100.0
        ))
    );
    println!();

    print_pane(&s, "Left", &view.left);
    print_pane(&s, "Right", &view.right);
}

fn print_pane(s: &Styles, side: &str, pane: &Pane) {
    let (rows, cols) = pane.raster_size();
    println!("  {}", s.header.apply_to(side));
    println!(
        "    {:<12}{}",
        s.label.apply_to("File"),
        s.value.apply_to(&pane.label)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Shape"),
        s.value.apply_to(format!("{:?}", pane.source_shape))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Color map"),
        s.method.apply_to(pane.color_mapping)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Raster"),
        s.value.apply_to(format!("{cols}x{rows}"))
    );
    println!();
}
