use float_cmp::approx_eq;

use svgbuild::{
    AppearanceConfig, Canvas, Circle, CircleConfig, Color, Component, ComponentError,
    ImageConfig, ImageContent, LineCap, Polyline, PolylineConfig, Rect, Rectangle,
    RectangleConfig, Scene, SvgCode, SvgConfig, SvgContent, TextAnchor, TextConfig,
    TextContent, TransformConfig, ViewBox,
};

fn fill(color: &str) -> AppearanceConfig {
    AppearanceConfig {
        fill: Some(Color::new(color).unwrap()),
        ..Default::default()
    }
}

#[test]
fn rectangle_quickstart() {
    let rect = Rectangle::new(RectangleConfig {
        x: 50.0,
        y: 50.0,
        width: 200.0,
        height: 100.0,
        rx: Some(10.0),
        ..Default::default()
    })
    .unwrap()
    .with_appearance(AppearanceConfig {
        fill: Some(Color::new("lightblue").unwrap()),
        stroke: Some(Color::new("navy").unwrap()),
        stroke_width: Some(2.0),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(rect.central_point().unwrap(), (150.0, 150.0));
    assert!(rect.has_rounded_corners());

    let rotated = rect
        .clone()
        .rotate(30.0)
        .and_then(|r| r.move_by(10.0, 0.0))
        .unwrap();
    assert_eq!(
        rotated.to_svg_element(),
        "<rect x=\"50\" y=\"50\" width=\"200\" height=\"100\" rx=\"10\" fill=\"lightblue\" \
         stroke=\"navy\" stroke-width=\"2\" transform=\"translate(10, 0) rotate(30, 150, 150)\" />"
    );

    let reset = rotated.reset_transform();
    assert_eq!(reset.to_svg_element(), rect.to_svg_element());
}

#[test]
fn circle_quickstart() {
    let mut circle = Circle::new(CircleConfig {
        cx: 100.0,
        cy: 100.0,
        r: 80.0,
    })
    .unwrap()
    .with_appearance(AppearanceConfig {
        stroke_dasharray: Some(vec![5.0, 3.0]),
        stroke_linecap: Some(LineCap::Round),
        ..fill("coral")
    })
    .unwrap();

    circle.restrict_size(80.0, 80.0).unwrap();
    assert_eq!(circle.transform().scale_factors(), (0.5, 0.5));

    let b = circle.transformed_bounding_box().unwrap();
    assert!(b.approx_eq(&Rect::new(60.0, 60.0, 140.0, 140.0)));
    assert!(approx_eq!(f64, circle.area(), std::f64::consts::PI * 6400.0));
}

#[test]
fn scale_accumulates_and_restrict_never_enlarges() {
    let mut r = Rectangle::default()
        .scale(0.5)
        .and_then(|r| r.scale(0.5))
        .unwrap();
    assert_eq!(r.transform().scale_factors(), (0.25, 0.25));

    r.restrict_size(1000.0, 1000.0).unwrap();
    assert_eq!(r.transform().scale_factors(), (0.25, 0.25));
}

#[test]
fn chained_transforms_stay_valid() {
    match Rectangle::default().scale(0.0) {
        Err(ComponentError::Config(e)) => assert_eq!(e.field, "scale"),
        other => panic!("zero scale accepted: {:?}", other),
    }

    let r = Rectangle::default()
        .move_by(f64::NAN, 0.0)
        .and_then(|r| r.rotate(f64::INFINITY));
    assert!(r.is_err());

    let r = Rectangle::default()
        .move_by(10.0, 0.0)
        .and_then(|r| r.rotate(45.0))
        .and_then(|r| r.scale(2.0))
        .unwrap();
    assert!(r.transform().validate().is_ok());
    assert!(!r.to_svg_element().contains("NaN"));
}

#[test]
fn skews_and_explicit_transforms() {
    let r = Rectangle::default()
        .skew_x(10.0)
        .and_then(|r| r.skew_y(-5.0))
        .unwrap();
    assert!(r
        .to_svg_element()
        .ends_with(r#"transform="skewX(10) skewY(355)" />"#));

    let t = TransformConfig {
        translate: Some((5.0, 5.0)),
        ..Default::default()
    };
    let c = Circle::default().with_transform(t).unwrap();
    assert!(c.has_transform());

    let bad = TransformConfig {
        scale: Some((0.0, 1.0)),
        ..Default::default()
    };
    assert_eq!(
        Circle::default().with_transform(bad).unwrap_err().field,
        "scale"
    );
}

#[test]
fn polyline_editing() {
    let mut p = Polyline::new(PolylineConfig::new(vec![(0.0, 0.0), (30.0, 40.0)])).unwrap();
    p.add_point(30.0, 0.0).unwrap();

    assert_eq!(p.point_count(), 3);
    assert_eq!(p.total_length(), 90.0);
    assert_eq!(p.size().unwrap(), (30.0, 40.0));
}

#[test]
fn content_components() {
    let text = TextContent::new(TextConfig {
        text_anchor: TextAnchor::End,
        ..TextConfig::new("right aligned")
    })
    .unwrap();
    assert_eq!(
        text.central_point(),
        Err(ComponentError::CentralPointUndetermined("text"))
    );

    let image = ImageContent::new(ImageConfig::new("data:image/png;base64,AAAA")).unwrap();
    assert_eq!(image.size().unwrap(), (100.0, 100.0));

    let svg = SvgContent::new(SvgConfig::new(
        SvgCode::new(r#"<circle cx="50" cy="50" r="10"/>"#).unwrap(),
    ))
    .unwrap();
    assert!(svg.to_svg_element().starts_with("<svg x=\"0\""));
}

#[test]
fn canvas_saves_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shapes").join("out.svg");

    let mut canvas = Canvas::new(400.0, 300.0)
        .unwrap()
        .with_viewbox(ViewBox::new(0.0, 0.0, 800.0, 600.0).unwrap());
    canvas
        .add(Rectangle::default().with_appearance(fill("gold")).unwrap())
        .add(TextContent::new(TextConfig::new("caption")).unwrap());
    canvas.save(&path).unwrap();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.contains(r#"viewBox="0 0 800 600""#));
    assert!(saved.contains(">caption</text>"));
}

#[test]
fn scene_round_trip_through_json() {
    let scene = Scene::from_json(
        r#"{ "width": 100, "height": 100, "components": [
             { "type": "circle", "config": { "r": 10 }, "transform": { "rotate": 45 } } ] }"#,
    )
    .unwrap();

    let json = serde_json::to_string(&scene).unwrap();
    assert_eq!(Scene::from_json(&json).unwrap(), scene);

    let svg = scene.into_canvas().unwrap().to_svg();
    assert!(svg.contains(r#"transform="rotate(45)""#));
}
