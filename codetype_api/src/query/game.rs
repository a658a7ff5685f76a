use super::{common::QueryCommon, Query, QueryParams};

/// Query for `GET /games`. Only paging is server-side; status filtering
/// happens on the client.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameQuery {
    pub common: QueryCommon,
}

impl Query for GameQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        self.common.append_to(&mut params);
        params
    }
}
