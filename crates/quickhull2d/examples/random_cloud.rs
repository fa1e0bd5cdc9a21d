//! Draw a random point cloud, compute its hull, print the CCW boundary.

use quickhull2d::prelude::*;

fn main() {
    let cfg = CloudCfg {
        count: 256,
        half_extent: 10.0,
    };
    let points = draw_point_cloud(cfg, ReplayToken { seed: 7, index: 0 });
    let hull = convex_hull(&points).expect("sampler output is finite");
    println!("{} points -> {} hull vertices", points.len(), hull.len());
    for p in hull.polygon() {
        println!("{}", p);
    }
}
