pub mod net;
pub mod queue;
pub mod sim;
pub mod topo;

#[cfg(test)]
mod test;
