//! A tour of `Circle`, ending with a demo document written to
//! `circle_quickstart.svg`.

use svgbuild::{AppearanceConfig, Canvas, Circle, CircleConfig, Color, Component};

fn circle(cx: f64, cy: f64, r: f64) -> anyhow::Result<Circle> {
    Ok(Circle::new(CircleConfig { cx, cy, r })?)
}

fn filled(fill: &str) -> anyhow::Result<AppearanceConfig> {
    Ok(AppearanceConfig {
        fill: Some(Color::new(fill)?),
        ..Default::default()
    })
}

fn main() -> anyhow::Result<()> {
    println!("== basics");
    println!("{}", circle(50.0, 50.0, 50.0)?.to_svg_element());
    println!("{}", circle(100.0, 100.0, 30.0)?.to_svg_element());

    println!("== styling");
    let dashed = circle(50.0, 50.0, 40.0)?.with_appearance(AppearanceConfig {
        stroke: Some(Color::new("purple")?),
        stroke_width: Some(3.0),
        stroke_dasharray: Some(vec![8.0, 4.0]),
        ..filled("none")?
    })?;
    println!("{}", dashed.to_svg_element());

    println!("== transforms");
    println!(
        "{}",
        circle(50.0, 50.0, 30.0)?
            .move_by(80.0, 60.0)?
            .to_svg_element()
    );
    println!("{}", circle(50.0, 50.0, 30.0)?.scale(2.0)?.to_svg_element());
    println!(
        "{}",
        circle(50.0, 50.0, 30.0)?
            .move_by(100.0, 50.0)?
            .scale(1.5)?
            .to_svg_element()
    );

    println!("== information");
    let info = circle(50.0, 60.0, 40.0)?;
    println!("central point: {:?}", info.central_point()?);
    println!("bounding box: {:?}", info.bounding_box()?);
    println!(
        "area: {:.2}, circumference: {:.2}",
        info.area(),
        info.circumference()
    );

    let mut big = circle(300.0, 200.0, 150.0)?.with_appearance(filled("gold")?)?;
    big.restrict_size(100.0, 100.0)?;
    println!("restricted: {}", big.to_svg_element());

    let mut canvas = Canvas::new(600.0, 400.0)?;
    for (i, color) in ["red", "orange", "green", "blue"].iter().enumerate() {
        let x = 80.0 + 140.0 * i as f64;
        canvas.add(
            circle(0.0, 0.0, 40.0)?
                .with_appearance(filled(color)?)?
                .move_by(x, 80.0)?,
        );
    }
    canvas.add(dashed.move_by(150.0, 250.0)?).add(big);

    canvas.save("circle_quickstart.svg")?;
    println!("wrote circle_quickstart.svg");

    Ok(())
}
