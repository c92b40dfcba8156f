use bitmap_sdf::mask::BinaryMask;

/// Centered filled square of `side` cells in a `width` × `height` background.
pub fn centered_square(width: usize, height: usize, side: usize) -> BinaryMask {
    assert!(side <= width && side <= height, "square must fit");
    let x0 = (width - side) / 2;
    let y0 = (height - side) / 2;
    BinaryMask::from_fn(width, height, move |x, y| {
        (x0..x0 + side).contains(&x) && (y0..y0 + side).contains(&y)
    })
}

/// Filled circle of `radius` cells around (`cx`, `cy`).
pub fn filled_circle(width: usize, height: usize, cx: usize, cy: usize, radius: usize) -> BinaryMask {
    BinaryMask::from_fn(width, height, move |x, y| {
        let dx = x as f32 - cx as f32;
        let dy = y as f32 - cy as f32;
        (dx * dx + dy * dy).sqrt() < radius as f32
    })
}
