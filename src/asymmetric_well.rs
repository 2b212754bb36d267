use ndarray as nd;
use qwell::{
    potential::PolyPotential,
    solve::{ self, Config },
    utils::wf_norm,
};

// solve for the three lowest states of an asymmetric polynomial well

fn main() {
    let well = PolyPotential::new(50.0, -200.0, 500.0);
    let x: nd::Array1<f64> = nd::Array1::linspace(-0.3, 0.3, 1000);
    let dx = x[1] - x[0];
    let V = well.evaluate(&x);

    let sols
        = solve::solve(&x, &V, Config { num_eigen: 3, ..Config::default() })
        .unwrap();
    println!("{} states computed", sols.len());
    for (n, sol) in sols.iter().enumerate() {
        println!(
            "E_{} = {:+.6}  (∫|ψ|² dx = {:.9})",
            n,
            sol.e,
            wf_norm(&sol.wf, dx),
        );
    }
}
