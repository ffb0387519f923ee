use binary_gap::solution;

const DEMO_INPUT: i32 = 2147483647;

fn main() -> anyhow::Result<()> {
    println!("{}", solution(DEMO_INPUT)?);
    Ok(())
}
