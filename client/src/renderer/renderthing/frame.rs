pub const PIXEL_BITS: usize = 4;

pub type Color = [u8; PIXEL_BITS];

/// Mutable view over one RGBA frame buffer. Drawing outside the buffer is
/// clipped silently.
pub struct RenderFrame<'a> {
    pub width: u32,
    pub height: u32,
    pub buffer: &'a mut [u8],
}

impl<'a> RenderFrame<'a> {
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [u8; PIXEL_BITS]> {
        self.buffer
            .chunks_exact_mut(PIXEL_BITS)
            .filter_map(|chunk| chunk.try_into().ok())
    }

    fn pixel_index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = (x as usize + y as usize * self.width as usize) * PIXEL_BITS;

        if index + PIXEL_BITS > self.buffer.len() {
            return None;
        }

        Some(index)
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8; PIXEL_BITS]> {
        let index = self.pixel_index(x, y)?;
        (&self.buffer[index..index + PIXEL_BITS]).try_into().ok()
    }

    pub fn pixel_mut(&mut self, x: u32, y: u32) -> Option<&mut [u8; PIXEL_BITS]> {
        let index = self.pixel_index(x, y)?;
        (&mut self.buffer[index..index + PIXEL_BITS]).try_into().ok()
    }

    pub fn draw_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(pixel) = self.pixel_mut(x, y) {
            *pixel = color;
        }
    }

    pub fn draw_square(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color) {
        for y in y..y.saturating_add(height).min(self.height) {
            for x in x..x.saturating_add(width).min(self.width) {
                self.draw_pixel(x, y, color);
            }
        }
    }

    pub fn draw_hline(&mut self, y: u32, color: Color) {
        self.draw_square(0, y, self.width, 1, color);
    }

    pub fn draw_vline(&mut self, x: u32, color: Color) {
        self.draw_square(x, 0, 1, self.height, color);
    }

    pub fn fill(&mut self, color: Color) {
        for pixel in self.pixels_mut() {
            *pixel = color;
        }
    }
}
