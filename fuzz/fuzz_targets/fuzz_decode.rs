#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, and a success must be fully populated
    let _ = bmptex::probe_bmp(data);
    if let Ok(bitmap) = bmptex::decode_bmp(data, enough::Unstoppable) {
        assert_eq!(
            bitmap.pixels().len(),
            3 * bitmap.width as usize * bitmap.height as usize
        );
    }
    let _ = bmptex::DecodeRequest::new(data)
        .with_palette_order(bmptex::PaletteOrder::Bgrx)
        .decode(enough::Unstoppable);
});
