//
//  mutation.rs
//  donorgraph
//
//  Created by hak (tharun)
//

use tracing::info;

use super::engine::DonationGraph;
use super::types::*;
use crate::error::Result;

impl DonationGraph {
    /// Record a donation taking `days` to transfer from `donor` to `org`.
    ///
    /// Both names are resolved before anything is written, so an unknown
    /// name leaves the graph untouched.
    pub fn donate(&mut self, donor: &str, org: &str, days: i64) -> Result<()> {
        self.write_named(donor, org, EdgeAttr::Weight, days)?;
        info!(%donor, %org, days, "donation recorded");
        Ok(())
    }

    /// Set the flow capacity of `from -> to`. Transfer days are kept.
    pub fn add_capacity(&mut self, from: &str, to: &str, capacity: i64) -> Result<()> {
        self.write_named(from, to, EdgeAttr::Capacity, capacity)?;
        info!(%from, %to, capacity, "capacity recorded");
        Ok(())
    }

    fn write_named(&mut self, from: &str, to: &str, attr: EdgeAttr, value: i64) -> Result<()> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;
        self.set_edge(from, to, attr, value)
    }
}
