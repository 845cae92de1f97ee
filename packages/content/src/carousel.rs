/// Slide position for the home-page image strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    index: usize,
    total: usize,
}

impl Carousel {
    pub fn new(total: usize) -> Self {
        Self { index: 0, total }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn next(&mut self) {
        if self.total > 0 {
            self.index = (self.index + 1) % self.total;
        }
    }

    pub fn prev(&mut self) {
        if self.total > 0 {
            self.index = (self.index + self.total - 1) % self.total;
        }
    }

    /// Horizontal shift of the strip, in percent of the viewport width.
    pub fn offset_percent(&self) -> usize {
        self.index * 100
    }

    pub fn transform(&self) -> String {
        format!("translateX(-{}%)", self.offset_percent())
    }
}
