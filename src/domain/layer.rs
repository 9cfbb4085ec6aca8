//! Layers and the workspace interface the picker reads from

use std::rc::Rc;

use tiny_skia::Pixmap;

use super::geometry::Size;

/// A single image layer as seen by the picker
#[derive(Clone, Debug)]
pub struct Layer {
    pub name: String,
    /// Layer pixels (premultiplied RGBA)
    pub surface: Pixmap,
    /// Placement of the surface inside the image, in image pixels
    pub offset: (i32, i32),
    /// Layer opacity (0.0-1.0)
    pub opacity: f32,
    pub hidden: bool,
}

impl Layer {
    pub fn new(name: impl Into<String>, surface: Pixmap) -> Self {
        Self {
            name: name.into(),
            surface,
            offset: (0, 0),
            opacity: 1.0,
            hidden: false,
        }
    }

    pub fn with_offset(mut self, x: i32, y: i32) -> Self {
        self.offset = (x, y);
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Bottom-right corner of the surface in image pixels
    pub fn extent(&self) -> Size {
        let right = self.offset.0.saturating_add(self.surface.width() as i32);
        let bottom = self.offset.1.saturating_add(self.surface.height() as i32);
        Size::new(right.max(0) as u32, bottom.max(0) as u32)
    }
}

/// Host-side image model consumed by the picker
///
/// Reads are expected to be cheap snapshots taken on the UI thread.
pub trait Workspace {
    /// Pixel dimensions of the logical image
    fn image_size(&self) -> Size;

    /// Layers to composite, bottom to top
    fn paintable_layers(&self) -> Vec<&Layer>;
}

impl<W: Workspace + ?Sized> Workspace for &W {
    fn image_size(&self) -> Size {
        (**self).image_size()
    }

    fn paintable_layers(&self) -> Vec<&Layer> {
        (**self).paintable_layers()
    }
}

impl<W: Workspace + ?Sized> Workspace for Rc<W> {
    fn image_size(&self) -> Size {
        (**self).image_size()
    }

    fn paintable_layers(&self) -> Vec<&Layer> {
        (**self).paintable_layers()
    }
}

/// Simple in-memory workspace: an image size and a layer stack
#[derive(Clone, Debug, Default)]
pub struct Document {
    size: Size,
    layers: Vec<Layer>,
}

impl Document {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            layers: Vec::new(),
        }
    }

    /// Build a document sized to cover every layer
    pub fn from_layers(layers: Vec<Layer>) -> Self {
        let size = layers
            .iter()
            .fold(Size::default(), |acc, layer| acc.union(layer.extent()));
        Self { size, layers }
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Push a layer on top of the stack
    pub fn push_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }
}

impl Workspace for Document {
    fn image_size(&self) -> Size {
        self.size
    }

    fn paintable_layers(&self) -> Vec<&Layer> {
        self.layers.iter().filter(|layer| !layer.hidden).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(w: u32, h: u32) -> Pixmap {
        Pixmap::new(w, h).unwrap()
    }

    #[test]
    fn test_paintable_layers_skip_hidden() {
        let mut doc = Document::new(Size::new(10, 10));
        doc.push_layer(Layer::new("background", surface(10, 10)));
        doc.push_layer(Layer::new("sketch", surface(10, 10)).with_hidden(true));
        doc.push_layer(Layer::new("ink", surface(10, 10)));

        let names: Vec<_> = doc
            .paintable_layers()
            .iter()
            .map(|layer| layer.name.as_str())
            .collect();
        assert_eq!(names, ["background", "ink"]);
    }

    #[test]
    fn test_from_layers_covers_offsets() {
        let doc = Document::from_layers(vec![
            Layer::new("a", surface(20, 10)),
            Layer::new("b", surface(5, 5)).with_offset(30, 12),
        ]);
        assert_eq!(doc.image_size(), Size::new(35, 17));
    }

    #[test]
    fn test_workspace_through_rc() {
        let doc = Rc::new(Document::new(Size::new(4, 3)));
        assert_eq!(Workspace::image_size(&doc), Size::new(4, 3));
    }
}
