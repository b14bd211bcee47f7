#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(
    bpp: u16,
    width: i32,
    height: i32,
    data_offset: u32,
    colors: u32,
    file_size: u32,
) -> Vec<u8> {
    let mut bmp = vec![0u8; 54];
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&file_size.to_le_bytes());
    bmp[10..14].copy_from_slice(&data_offset.to_le_bytes());
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // info header size
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&bpp.to_le_bytes());
    bmp[46..50].copy_from_slice(&colors.to_le_bytes());
    bmp
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 24-bit 1x1: 3 pixel bytes + 1 padding
    let mut bmp = header(24, 1, 1, 54, 0, 58);
    bmp.extend_from_slice(&[0x00, 0x00, 0xff, 0x00]); // BGR red
    fs::write(format!("{dir}/bmp24_1x1.bmp"), bmp).unwrap();

    // 24-bit 5x2: 15 pixel bytes + 1 padding per row
    let mut bmp = header(24, 5, 2, 54, 0, 54 + 32);
    for i in 0..32u8 {
        bmp.push(i.wrapping_mul(37));
    }
    fs::write(format!("{dir}/bmp24_5x2.bmp"), bmp).unwrap();

    // 8-bit 2x2 with a 256-entry palette
    let mut bmp = header(8, 2, 2, 54 + 1024, 256, 54 + 1024 + 8);
    for i in 0..=255u8 {
        bmp.extend_from_slice(&[i, 255 - i, i / 2, 0]);
    }
    bmp.extend_from_slice(&[0, 255, 0, 0, 17, 34, 0, 0]);
    fs::write(format!("{dir}/bmp8_2x2.bmp"), bmp).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let mut rle = header(8, 2, 2, 54, 256, 54);
    rle[30..34].copy_from_slice(&1u32.to_le_bytes());
    fs::write(format!("{dir}/bmp_rle8.bin"), rle).unwrap();

    println!("Generated seed corpus in {dir}/");
}
