//! Reference flow
//!
//! Exercises every cursor feature, including the two ways an author can
//! attach a node to a parent they did not mean to: appending on the
//! restored root after the last checkout, and reusing a branch cursor that
//! left its checkout.

use dendrite_core::Flow;

pub fn build_demo() -> Flow {
    let mut f = Flow::new("demo");
    f.node(); // 0
    f.node(); // 1
    f.stage_wait(10); // (1,2)
    f.node(); // 2
    {
        let mut g = f.wait(15); // (2,3)
        g.node(); // 3
        g.node(); // 4
    }
    let mut h = {
        let mut h = f.wait(100); // (2,5)
        h.node(); // 5
        h.node(); // 6
        h.into_branch()
    };
    {
        let _i = f.wait(1000); // nothing
    }

    f.node(); // 7, hangs off 2
    h.node(); // 8, hangs off 6

    {
        let mut g = f.wait(1337); // (7,9)
        g.node(); // 9
    }
    f.stage_wait(123); // (7,10)
    f.node(); // 10

    f
}
