//! The top-level SVG document.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::attributes::Attributes;
use crate::component::Component;
use crate::error::*;
use crate::parsers::check_non_negative;
use crate::viewbox::ViewBox;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// An SVG document made of components, drawn in insertion order.
pub struct Canvas {
    width: f64,
    height: f64,
    viewbox: Option<ViewBox>,
    components: Vec<Box<dyn Component>>,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Result<Canvas, ConfigError> {
        check_non_negative("width", width)?;
        check_non_negative("height", height)?;

        Ok(Canvas {
            width,
            height,
            viewbox: None,
            components: Vec::new(),
        })
    }

    /// Uses `viewbox` instead of the default `0 0 width height`.
    pub fn with_viewbox(mut self, viewbox: ViewBox) -> Canvas {
        self.viewbox = Some(viewbox);
        self
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn viewbox(&self) -> ViewBox {
        self.viewbox
            .unwrap_or_else(|| ViewBox::from_size(self.width, self.height))
    }

    pub fn add(&mut self, component: impl Component + 'static) -> &mut Canvas {
        self.add_boxed(Box::new(component))
    }

    pub fn add_boxed(&mut self, component: Box<dyn Component>) -> &mut Canvas {
        svg_log!("adding {} as component #{}", component.name(), self.components.len());
        self.components.push(component);
        self
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn components(&self) -> impl Iterator<Item = &dyn Component> {
        self.components.iter().map(|c| c.as_ref())
    }

    pub fn components_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Component>> {
        self.components.iter_mut()
    }

    /// Calls [`Component::restrict_size`] on every component.
    ///
    /// Stops at the first component whose size cannot be determined.
    pub fn restrict_all(&mut self, max_width: f64, max_height: f64) -> Result<(), ComponentError> {
        for c in self.components.iter_mut() {
            c.restrict_size(max_width, max_height)?;
        }

        Ok(())
    }

    /// The complete document, one component element per line.
    pub fn to_svg(&self) -> String {
        let mut attrs = Attributes::new();
        attrs.insert("xmlns", SVG_NAMESPACE);
        attrs.insert_number("width", self.width);
        attrs.insert_number("height", self.height);
        attrs.insert("viewBox", self.viewbox().to_string());

        let mut svg = format!("<svg {}>\n", attrs);

        for c in &self.components {
            svg.push_str("  ");
            svg.push_str(&c.to_svg_element());
            svg.push('\n');
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Writes the document to `path`, creating missing parent directories.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), CanvasError> {
        let path = path.as_ref();
        let io_error = |source| CanvasError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        fs::write(path, self.to_svg()).map_err(io_error)?;

        svg_log!(
            "saved {} components to {}",
            self.components.len(),
            path.display()
        );

        Ok(())
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("viewbox", &self.viewbox)
            .field(
                "components",
                &self.components.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
