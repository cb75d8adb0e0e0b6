//! # Tanh neuron and a tiny MLP
//!
//! Builds the classic two-input tanh neuron by hand, runs the backward pass
//! and prints every node gradient. Then trains a small `Mlp` for a few steps
//! of plain gradient descent, reusing the parameter leaves across passes with
//! `Graph::checkpoint` / `Graph::rewind`.
//!
//! ## Exécution
//! `RUST_LOG=debug cargo run --example tanh_neuron`

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalarust_core::{Graph, Mlp, Module, ScalarustError};

fn neuron() -> Result<(), ScalarustError> {
    let mut graph = Graph::new();
    let x1 = graph.leaf(2.0)?;
    let x2 = graph.leaf(0.0)?;
    let w1 = graph.leaf(-3.0)?;
    let w2 = graph.leaf(1.0)?;
    let b = graph.leaf(6.8813735870195432)?;

    let x1w1 = graph.mul(x1, w1)?;
    let x2w2 = graph.mul(x2, w2)?;
    let sum = graph.add(x1w1, x2w2)?;
    let n = graph.add(sum, b)?;
    let o = graph.tanh(n)?;

    for (id, name) in [(x1, "x1"), (x2, "x2"), (w1, "w1"), (w2, "w2"), (b, "b"), (n, "n"), (o, "o")] {
        graph.set_label(id, name)?;
    }
    graph.backward(o)?;

    println!("--- neuron ---");
    for id in [x1, x2, w1, w2, b, n, o] {
        println!("{:>3}: {}", graph.label(id)?.unwrap_or(""), graph.node(id)?);
    }
    Ok(())
}

fn train() -> Result<(), ScalarustError> {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(42);
    let mlp = Mlp::new(&mut graph, 3, &[4, 4, 1], &mut rng)?;
    let base = graph.checkpoint();
    println!("--- mlp ({} parameters) ---", mlp.num_parameters());

    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];
    let learning_rate = 0.05;

    for step in 0..20 {
        let mut terms = Vec::with_capacity(xs.len());
        for (x, &y) in xs.iter().zip(&ys) {
            let inputs = graph.leaves(x)?;
            let pred = mlp.forward_scalar(&mut graph, &inputs)?;
            let diff = graph.sub(pred, y)?;
            terms.push(graph.pow(diff, 2)?);
        }
        let zero = graph.leaf(0.0)?;
        let loss = graph.sum(terms, zero)?;

        mlp.zero_grad(&mut graph)?;
        graph.backward(loss)?;
        let loss_value = graph.data(loss)?;
        graph.rewind(base)?;

        for p in mlp.parameters() {
            let updated = graph.data(p)? - learning_rate * graph.grad(p)?;
            graph.set_leaf_data(p, updated)?;
        }
        println!("step {:>2}: loss = {:.6}", step, loss_value);
    }
    Ok(())
}

fn main() -> Result<(), ScalarustError> {
    env_logger::init();
    neuron()?;
    train()
}
