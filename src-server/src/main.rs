fn main() -> anyhow::Result<()> {
    inspect_server_lib::run()
}
