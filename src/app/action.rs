/// Side effects requested by the handler and carried out by the main loop.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    StartTicker { generation: u64 },
    StopTicker,
    Quit,
}
