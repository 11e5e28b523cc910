use super::*;

#[test]
fn mul_div255_endpoints() {
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(0, 255), 0);
    assert_eq!(mul_div255_u16(200, 0), 0);
    assert_eq!(mul_div255_u8(255, 128), 128);
}

#[test]
fn trunc_channel_truncates_toward_zero() {
    assert_eq!(trunc_channel(127.5), 127);
    assert_eq!(trunc_channel(178.999), 178);
    assert_eq!(trunc_channel(0.0), 0);
    assert_eq!(trunc_channel(300.0), 255);
}
