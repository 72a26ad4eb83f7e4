//! Load points, attach an EM result, and print the series a chart library would draw.

use clusterviz::cluster::{ClusterCompute, DataFetch};
use clusterviz::geom::{Matrix2, Point};
use clusterviz::{ClusteringResult, MethodDescriptor, RenderProjector, Result, Session};

/// Three well-separated groups in 2D.
struct Fixture;

impl DataFetch for Fixture {
    fn fetch(&self) -> Result<Vec<Point>> {
        Ok(vec![
            // Group A (near origin)
            Point::new(0.0, 0.0),
            Point::new(0.1, 0.2),
            Point::new(0.2, 0.1),
            Point::new(-0.1, 0.1),
            // Group B (near (5, 5))
            Point::new(5.0, 5.0),
            Point::new(5.1, 4.9),
            Point::new(4.9, 5.1),
            Point::new(5.2, 5.2),
            // Group C (near (10, 0))
            Point::new(10.0, 0.0),
            Point::new(10.1, 0.1),
            Point::new(9.9, -0.1),
            Point::new(10.2, 0.2),
        ])
    }
}

/// Stands in for the clustering service: assigns by nearest seed and reports
/// the per-group sample covariance.
struct NearestSeed;

impl ClusterCompute for NearestSeed {
    fn compute(
        &self,
        points: &[Point],
        method: &MethodDescriptor,
        n_clusters: usize,
    ) -> Result<ClusteringResult> {
        let seeds = [Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(10.0, 0.0)];
        let seeds = &seeds[..n_clusters.min(seeds.len())];

        let labels: Vec<i64> = points
            .iter()
            .map(|p| {
                let dist = |s: &Point| (p.x - s.x).powi(2) + (p.y - s.y).powi(2);
                (0..seeds.len())
                    .min_by(|&a, &b| dist(&seeds[a]).total_cmp(&dist(&seeds[b])))
                    .unwrap_or(0) as i64
            })
            .collect();

        let mut centroids = Vec::with_capacity(seeds.len());
        let mut covariances = Vec::with_capacity(seeds.len());
        for k in 0..seeds.len() {
            let members: Vec<Point> = points
                .iter()
                .zip(&labels)
                .filter(|(_, &l)| l == k as i64)
                .map(|(p, _)| *p)
                .collect();
            let n = members.len().max(1) as f64;
            let mx = members.iter().map(|p| p.x).sum::<f64>() / n;
            let my = members.iter().map(|p| p.y).sum::<f64>() / n;
            let (mut sxx, mut sxy, mut syy) = (0.0, 0.0, 0.0);
            for p in &members {
                sxx += (p.x - mx) * (p.x - mx);
                sxy += (p.x - mx) * (p.y - my);
                syy += (p.y - my) * (p.y - my);
            }
            centroids.push(Point::new(mx, my));
            covariances.push(Matrix2::symmetric(sxx / n, sxy / n, syy / n));
        }

        let mut result = ClusteringResult::new(labels, centroids);
        if method.covariance {
            result = result.with_covariances(covariances);
        }
        if method.weights {
            result = result.with_weights(vec![1.0 / seeds.len() as f64; seeds.len()]);
        }
        Ok(result)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let projector = RenderProjector::default();
    let session = Session::new().load(&Fixture)?;
    println!("=== {} ===", session.title());
    for s in session.project(&projector)? {
        println!("  {:?} {:<28} {} points", s.role, s.label, s.geometry.len());
    }

    let session = session.run(&NearestSeed, MethodDescriptor::em(), 3)?;
    println!("\n=== {} ===", session.title());
    for s in session.project(&projector)? {
        println!(
            "  {:<18} {:<28} {:>3} points  {}",
            format!("{:?}", s.role),
            s.label,
            s.geometry.len(),
            s.style.color
        );
    }

    if let Some(report) = session.report()? {
        println!("\n{report}");
    }
    Ok(())
}
