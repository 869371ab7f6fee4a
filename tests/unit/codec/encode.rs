use super::*;
use crate::codec::decode::decode_image;

#[test]
fn png_roundtrip_is_lossless() {
    let mut img = RasterBuffer::filled(3, 2, [1, 2, 3, 4]).unwrap();
    img.set_pixel(2, 1, [250, 0, 125, 0]);
    let png = encode_png(&img).unwrap();
    assert_eq!(&png[1..4], b"PNG");
    assert_eq!(decode_image(&png).unwrap(), img);
}
