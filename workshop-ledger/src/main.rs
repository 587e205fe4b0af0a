fn main() {
    workshop_ledger::server::run()
}
