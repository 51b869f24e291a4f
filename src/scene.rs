//! Scene documents: a canvas described in JSON.
//!
//! ```json
//! {
//!   "width": 400,
//!   "height": 300,
//!   "components": [
//!     { "type": "rectangle", "config": { "width": 100, "height": 50 },
//!       "appearance": { "fill": "skyblue" },
//!       "transform": { "rotate": "45deg" } },
//!     { "type": "text", "config": { "x": 200, "y": 150, "text": "Hello" } }
//!   ]
//! }
//! ```
//!
//! Every component has a `type` and an optional `config` with the fields of
//! the matching configuration struct.  `appearance` only applies to shapes.
//! `restrict` is a `[max_width, max_height]` pair passed to
//! [`Component::restrict_size`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::appearance::AppearanceConfig;
use crate::canvas::Canvas;
use crate::component::Component;
use crate::content::{Content, ContentConfig, ImageConfig, SvgConfig, TextConfig};
use crate::error::*;
use crate::shapes::{CircleConfig, Geometry, PolylineConfig, RectangleConfig, Shape};
use crate::transform::TransformConfig;
use crate::viewbox::ViewBox;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewbox: Option<ViewBox>,
    #[serde(default)]
    pub components: Vec<SceneComponent>,
}

keyword_enum!(
    /// The `type` of a scene component.
    ComponentKind {
        Rectangle => "rectangle",
        Circle => "circle",
        Polyline => "polyline",
        Text => "text",
        Image => "image",
        Svg => "svg",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneComponent {
    #[serde(rename = "type")]
    pub kind: ComponentKind,

    /// Checked against the configuration struct for `kind` when the
    /// component is built.
    #[serde(default)]
    pub config: serde_json::Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearance: Option<AppearanceConfig>,

    #[serde(default)]
    pub transform: TransformConfig,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrict: Option<(f64, f64)>,
}

impl Scene {
    pub fn from_json(json: &str) -> Result<Scene, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds and validates every component.
    pub fn into_canvas(self) -> Result<Canvas, SceneError> {
        let mut canvas = Canvas::new(self.width, self.height)?;

        if let Some(viewbox) = self.viewbox {
            canvas = canvas.with_viewbox(viewbox);
        }

        for (index, c) in self.components.iter().enumerate() {
            canvas.add_boxed(c.build(index)?);
        }

        Ok(canvas)
    }
}

impl SceneComponent {
    fn build(&self, index: usize) -> Result<Box<dyn Component>, SceneError> {
        let component_error = |source: ComponentError| SceneError::Component { index, source };

        let mut component = match self.kind {
            ComponentKind::Rectangle => self.shape::<RectangleConfig>(index)?,
            ComponentKind::Circle => self.shape::<CircleConfig>(index)?,
            ComponentKind::Polyline => self.shape::<PolylineConfig>(index)?,
            ComponentKind::Text => self.content::<TextConfig>(index)?,
            ComponentKind::Image => self.content::<ImageConfig>(index)?,
            ComponentKind::Svg => self.content::<SvgConfig>(index)?,
        };

        if let Some((max_width, max_height)) = self.restrict {
            component
                .restrict_size(max_width, max_height)
                .map_err(component_error)?;
        }

        Ok(component)
    }

    fn config<C>(&self, index: usize) -> Result<C, SceneError>
    where
        C: DeserializeOwned + Default,
    {
        if self.config.is_null() {
            return Ok(C::default());
        }

        C::deserialize(&self.config).map_err(|source| SceneError::InvalidConfig {
            index,
            kind: self.kind.as_str(),
            source,
        })
    }

    fn shape<G>(&self, index: usize) -> Result<Box<dyn Component>, SceneError>
    where
        G: Geometry + DeserializeOwned + Default + 'static,
    {
        let config_error = |e: ConfigError| SceneError::Component {
            index,
            source: e.into(),
        };

        let shape = Shape::<G>::new(self.config(index)?)
            .and_then(|s| s.with_appearance(self.appearance.clone().unwrap_or_default()))
            .and_then(|s| s.with_transform(self.transform))
            .map_err(config_error)?;

        Ok(Box::new(shape))
    }

    fn content<C>(&self, index: usize) -> Result<Box<dyn Component>, SceneError>
    where
        C: ContentConfig + DeserializeOwned + Default + 'static,
    {
        let config_error = |e: ConfigError| SceneError::Component {
            index,
            source: e.into(),
        };

        if self.appearance.is_some() {
            return Err(config_error(ConfigError::value(
                "appearance",
                "only shapes have an appearance",
            )));
        }

        let content = Content::<C>::new(self.config(index)?)
            .and_then(|c| c.with_transform(self.transform))
            .map_err(config_error)?;

        Ok(Box::new(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    const SCENE: &str = r##"
    {
      "width": 400,
      "height": 300,
      "components": [
        { "type": "rectangle",
          "config": { "x": 10, "y": 10, "width": 100, "height": 50 },
          "appearance": { "fill": "#336699", "stroke_dasharray": "4 2" } },
        { "type": "circle", "transform": { "translate": [100, 0] } },
        { "type": "polyline", "config": { "points": [[0, 0], [10, 10]] } },
        { "type": "text", "config": { "x": 200, "y": 20, "text": "Title" } },
        { "type": "image", "config": { "href": "logo.png" }, "restrict": [50, 50] },
        { "type": "svg", "config": { "svg_content": "<g><rect/></g>" } }
      ]
    }
    "##;

    #[test]
    fn builds_all_component_types() {
        let canvas = Scene::from_json(SCENE).unwrap().into_canvas().unwrap();
        assert_eq!(canvas.len(), 6);

        let names: Vec<_> = canvas.components().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec!["rect", "circle", "polyline", "text", "image", "svg"]
        );

        let svg = canvas.to_svg();
        assert!(svg.contains(
            r##"<rect x="10" y="10" width="100" height="50" fill="#336699" stroke-dasharray="4,2" />"##
        ));
        assert!(svg.contains(r#"<circle cx="50" cy="50" r="50" transform="translate(100, 0)" />"#));
        assert!(svg.contains(">Title</text>"));
        assert!(svg.contains("<g><rect/></g></svg>"));

        let image = canvas.components().nth(4).unwrap();
        assert_eq!(image.transform().scale_factors(), (0.5, 0.5));
    }

    #[test]
    fn viewbox_is_optional() {
        let scene =
            Scene::from_json(r#"{ "width": 10, "height": 10, "viewbox": "0 0 20 20" }"#).unwrap();
        assert!(scene.viewbox.is_some());
        assert!(scene
            .into_canvas()
            .unwrap()
            .to_svg()
            .contains(r#"viewBox="0 0 20 20""#));
    }

    #[test]
    fn errors_name_the_component() {
        let err = Scene::from_json(
            r#"{ "width": 10, "height": 10, "components": [
                 { "type": "circle" },
                 { "type": "circle", "config": { "r": -1 } } ] }"#,
        )
        .unwrap()
        .into_canvas()
        .unwrap_err();
        assert!(matches!(err, SceneError::Component { index: 1, .. }));
        assert_eq!(err.to_string(), "component 1");
        assert_eq!(
            err.source().unwrap().to_string(),
            "r: invalid value: must not be negative"
        );

        let err = Scene::from_json(
            r#"{ "width": 10, "height": 10, "components": [
                 { "type": "rectangle", "config": { "radius": 1 } } ] }"#,
        )
        .unwrap()
        .into_canvas()
        .unwrap_err();
        assert!(matches!(
            err,
            SceneError::InvalidConfig {
                index: 0,
                kind: "rectangle",
                ..
            }
        ));
    }

    #[test]
    fn text_has_no_appearance() {
        let err = Scene::from_json(
            r#"{ "width": 10, "height": 10, "components": [
                 { "type": "text", "appearance": { "fill": "red" } } ] }"#,
        )
        .unwrap()
        .into_canvas()
        .unwrap_err();
        assert!(err.source().unwrap().to_string().starts_with("appearance:"));
    }

    #[test]
    fn text_cannot_be_restricted() {
        let err = Scene::from_json(
            r#"{ "width": 10, "height": 10, "components": [
                 { "type": "text", "restrict": [5, 5] } ] }"#,
        )
        .unwrap()
        .into_canvas()
        .unwrap_err();
        assert!(matches!(
            err,
            SceneError::Component {
                index: 0,
                source: ComponentError::SizeUndetermined("text")
            }
        ));
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(matches!(
            Scene::from_json("{ \"width\": 10 }"),
            Err(SceneError::Json(_))
        ));
        assert!(Scene::from_json(
            r#"{ "width": 1, "height": 1, "components": [ { "type": "hexagon" } ] }"#
        )
        .is_err());
        assert!(matches!(
            Scene::from_json(r#"{ "width": -1, "height": 1 }"#)
                .unwrap()
                .into_canvas(),
            Err(SceneError::Config(_))
        ));
    }
}
