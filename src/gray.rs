//! 8-bit grayscale buffers exchanged with the image I/O glue.
/// Owned 8-bit grayscale buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct GrayBuffer {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl GrayBuffer {
    /// Construct an owned grayscale buffer given raw bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        assert_eq!(data.len(), width * height, "buffer size mismatch");
        let stride = width;
        Self {
            width,
            height,
            stride,
            data,
        }
    }

    /// Buffer width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Buffer height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw pixel bytes in row-major order
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    /// Borrow as a read-only `GrayView`
    pub fn as_view(&self) -> GrayView<'_> {
        GrayView {
            w: self.width,
            h: self.height,
            stride: self.stride,
            data: &self.data,
        }
    }
}

/// Borrowed grayscale view over caller-owned bytes, `stride` elements
/// between consecutive rows.
#[derive(Clone, Debug)]
pub struct GrayView<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize,
    pub data: &'a [u8],
}

impl<'a> GrayView<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
