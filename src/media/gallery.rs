use crate::models::property::PropertyImage;

/// Cursor over a property's images; next/previous wrap around.
#[derive(Debug, Clone)]
pub struct Gallery<'a> {
    images: &'a [PropertyImage],
    index: usize,
}

impl<'a> Gallery<'a> {
    pub fn new(images: &'a [PropertyImage]) -> Gallery<'a> {
        Gallery { images, index: 0 }
    }

    pub fn current(&self) -> Option<&'a PropertyImage> {
        self.images.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) -> Option<&'a PropertyImage> {
        if !self.images.is_empty() {
            self.index = (self.index + 1) % self.images.len();
        }
        self.current()
    }

    pub fn previous(&mut self) -> Option<&'a PropertyImage> {
        if !self.images.is_empty() {
            self.index = (self.index + self.images.len() - 1) % self.images.len();
        }
        self.current()
    }

    pub fn go_to(&mut self, index: usize) -> Option<&'a PropertyImage> {
        if index < self.images.len() {
            self.index = index;
        }
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: &str, order: u32) -> PropertyImage {
        PropertyImage {
            id: id.to_string(),
            url: format!("https://cdn.sanity.io/{}.jpg", id),
            alt: String::new(),
            caption: String::new(),
            order,
        }
    }

    #[test]
    fn wraps_both_directions() {
        let images = vec![image("a", 1), image("b", 2), image("c", 3)];
        let mut gallery = Gallery::new(&images);

        assert_eq!(gallery.previous().map(|i| i.id.as_str()), Some("c"));
        assert_eq!(gallery.next().map(|i| i.id.as_str()), Some("a"));
        assert_eq!(gallery.go_to(1).map(|i| i.id.as_str()), Some("b"));
        assert_eq!(gallery.go_to(7).map(|i| i.id.as_str()), Some("b"));
    }

    #[test]
    fn empty_gallery_has_no_current_image() {
        let mut gallery = Gallery::new(&[]);
        assert!(gallery.current().is_none());
        assert!(gallery.next().is_none());
        assert_eq!(gallery.index(), 0);
    }
}
