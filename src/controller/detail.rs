// src/controller/detail.rs
// DOCUMENTATION: Place detail page flow
// PURPOSE: Show the add-review section to signed-in users, fetch and render one place

use super::{messages, PageController};
use crate::errors::ClientError;
use crate::page::{ids, query_param, Page};
use crate::views::render_place_detail;

impl<P: Page> PageController<P> {
    pub(super) async fn show_place_detail(&self) {
        let auth = self.auth_from_cookie();
        self.page
            .set_visible(ids::ADD_REVIEW, auth.is_authenticated());

        let Some(place_id) = query_param(&self.page.query(), "id") else {
            self.report_fetch_failure(&ClientError::MissingPlaceId, messages::PLACE_DETAILS_FAILED);
            return;
        };

        match self.api.fetch_place_detail(&auth, &place_id).await {
            Ok(place) => {
                let view = render_place_detail(&place);
                // Each panel renders independently of the other
                self.page.replace_children(ids::PLACE_DETAILS, &view.info);
                self.page.replace_children(ids::REVIEWS, &view.reviews);
            }
            Err(err) => self.report_fetch_failure(&err, messages::PLACE_DETAILS_FAILED),
        }
    }
}
