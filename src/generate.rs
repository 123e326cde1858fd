use rand::Rng;

use crate::error::{Error, Result};
use crate::input::Workload;

/// Random reference string over `0..pages`, drawn from the thread rng.
pub fn generate(pages: u32, frames: usize, requests: usize) -> Result<Workload> {
    return generate_with(&mut rand::thread_rng(), pages, frames, requests);
}

pub fn generate_with<R: Rng>(
    rng: &mut R,
    pages: u32,
    frames: usize,
    requests: usize,
) -> Result<Workload> {
    if frames == 0 {
        return Err(Error::NoFrames);
    }
    if pages == 0 && requests > 0 {
        return Err(Error::InvalidRange(
            "cannot draw requests from zero pages".to_string(),
        ));
    }

    let requests = (0..requests).map(|_| rng.gen_range(0, pages)).collect();

    return Ok(Workload {
        num_pages: pages as usize,
        num_frames: frames,
        requests,
    });
}
