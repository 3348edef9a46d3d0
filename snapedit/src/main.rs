fn main() -> anyhow::Result<()> {
    extern crate snapedit;

    snapedit::console_main()
}
