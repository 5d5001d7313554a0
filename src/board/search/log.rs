/// Summary of one completed search.
pub struct SearchInfo {
    pub depth: u32,
    pub nodes: u64,
    pub evaluations: u64,
    pub cutoffs: u64,
    pub tree_states: usize,
    pub score: f64,
    pub time_ms: u128,
    pub turn: String,
}

pub trait SearchLogger {
    fn info(&self, info: &SearchInfo);
}

pub struct StdoutLogger;

impl SearchLogger for StdoutLogger {
    fn info(&self, info: &SearchInfo) {
        println!(
            "info depth {} nodes {} evals {} cutoffs {} states {} score {:.4} time {} turn {}",
            info.depth,
            info.nodes,
            info.evaluations,
            info.cutoffs,
            info.tree_states,
            info.score,
            info.time_ms,
            info.turn
        );
    }
}
