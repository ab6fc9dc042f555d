use std::io;

fn main() -> anyhow::Result<()> {
    searchlab::print_info();
    println!("type 'help' for the list of commands");
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    searchlab::Shell::new(&mut input, &mut output).run()
}
