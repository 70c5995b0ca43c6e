use light_bitarray::BitArray;

fn render(bits: &BitArray) -> String {
    bits.iter().map(|b| if b { '1' } else { '0' }).collect()
}

fn cycle(bits: &mut BitArray, offset: usize, length: usize, step: isize) {
    let start = render(bits);
    loop {
        bits.rotate(offset, length, step);
        let now = render(bits);
        println!("{now}");
        if now == start {
            return;
        }
    }
}

fn main() -> light_bitarray::Result<()> {
    let mut bits = BitArray::from_bits(&[
        true, true, false, true, false, false, true, false, true, true,
    ])?;
    println!("{bits:?}");
    cycle(&mut bits, 2, 6, 1);
    bits.rotate(0, 10, 3);
    println!("{bits:?}");
    Ok(())
}
