//! A tour of `Rectangle`: styling, transforms, rounded corners, and a demo
//! document written to `rectangle_quickstart.svg`.

use svgbuild::{AppearanceConfig, Canvas, Color, Component, Rectangle, RectangleConfig};

fn rect(width: f64, height: f64) -> anyhow::Result<Rectangle> {
    Ok(Rectangle::new(RectangleConfig {
        width,
        height,
        ..Default::default()
    })?)
}

fn styled(fill: &str, stroke: &str) -> anyhow::Result<AppearanceConfig> {
    Ok(AppearanceConfig {
        fill: Some(Color::new(fill)?),
        stroke: Some(Color::new(stroke)?),
        stroke_width: Some(2.0),
        ..Default::default()
    })
}

fn main() -> anyhow::Result<()> {
    println!("== basics");
    println!("{}", rect(100.0, 50.0)?.to_svg_element());
    println!(
        "{}",
        Rectangle::new(RectangleConfig {
            x: 10.0,
            y: 20.0,
            width: 100.0,
            height: 50.0,
            ..Default::default()
        })?
        .to_svg_element()
    );

    println!("== styling");
    println!(
        "{}",
        rect(100.0, 50.0)?
            .with_appearance(styled("lightblue", "navy")?)?
            .to_svg_element()
    );
    println!(
        "{}",
        rect(100.0, 50.0)?
            .with_appearance(AppearanceConfig {
                fill_opacity: Some(0.5),
                stroke_dasharray: Some(vec![5.0, 3.0]),
                ..styled("skyblue", "blue")?
            })?
            .to_svg_element()
    );

    println!("== transforms");
    println!("{}", rect(80.0, 40.0)?.move_by(50.0, 30.0)?.to_svg_element());
    println!("{}", rect(80.0, 40.0)?.rotate(45.0)?.to_svg_element());
    println!("{}", rect(80.0, 40.0)?.scale(1.5)?.to_svg_element());

    println!("== rounded corners");
    let rounded = Rectangle::new(RectangleConfig {
        width: 100.0,
        height: 50.0,
        rx: Some(20.0),
        ry: Some(10.0),
        ..Default::default()
    })?
    .with_appearance(styled("coral", "darkred")?)?;
    println!("{}", rounded.to_svg_element());

    println!("== information");
    let info = Rectangle::new(RectangleConfig {
        x: 10.0,
        y: 20.0,
        width: 100.0,
        height: 50.0,
        ..Default::default()
    })?;
    println!("central point: {:?}", info.central_point()?);
    println!("bounding box: {:?}", info.bounding_box()?);
    println!("rounded corners: {}", info.has_rounded_corners());
    println!("area: {}, perimeter: {}", info.area(), info.perimeter());

    let mut canvas = Canvas::new(600.0, 300.0)?;
    canvas
        .add(
            rect(100.0, 50.0)?
                .with_appearance(styled("lightgray", "black")?)?
                .move_by(50.0, 50.0)?,
        )
        .add(
            rect(100.0, 50.0)?
                .with_appearance(styled("lightblue", "navy")?)?
                .move_by(200.0, 50.0)?,
        )
        .add(rounded.move_by(350.0, 50.0)?)
        .add(
            rect(100.0, 50.0)?
                .with_appearance(styled("lightpink", "deeppink")?)?
                .rotate(30.0)?
                .move_by(200.0, 150.0)?,
        );

    canvas.save("rectangle_quickstart.svg")?;
    println!("wrote rectangle_quickstart.svg");

    Ok(())
}
