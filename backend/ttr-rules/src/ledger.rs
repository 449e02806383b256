use crate::city::City;
use crate::color::Color;
use crate::route::{Route, RouteId};

use smallvec::SmallVec;
use std::collections::BTreeMap;

// Most cities on a standard board have at most 8 routes, counting parallel routes.
const MAX_ROUTES_PER_CITY: usize = 8;

/// Routes incident to a single city, in board order.
type IncidentRoutes = SmallVec<[RouteId; MAX_ROUTES_PER_CITY]>;

/// The authoritative record of which player claimed which route.
///
/// A claim is permanent: there is no way to release or transfer a route.
/// Players are identified by their seat index.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteLedger {
    routes: Vec<Route>,
    /// Indexed by [`RouteId`].
    claimants: Vec<Option<usize>>,
    /// Maps each city to the routes it is an endpoint of.
    routes_by_city: BTreeMap<City, IncidentRoutes>,
}

impl RouteLedger {
    /// Creates a ledger over the given routes, all unclaimed.
    /// The id of each route is its position in `routes`.
    pub fn new(routes: Vec<Route>) -> Self {
        let mut routes_by_city: BTreeMap<City, IncidentRoutes> = BTreeMap::new();
        for (index, route) in routes.iter().enumerate() {
            for city in [&route.city1, &route.city2] {
                routes_by_city
                    .entry(city.clone())
                    .or_default()
                    .push(RouteId(index));
            }
        }

        Self {
            claimants: vec![None; routes.len()],
            routes,
            routes_by_city,
        }
    }

    #[inline]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    #[inline]
    pub fn route(&self, route_id: RouteId) -> Option<&Route> {
        self.routes.get(route_id.0)
    }

    /// Whether the route is claimed. Unknown routes are never claimed.
    #[inline]
    pub fn is_claimed(&self, route_id: RouteId) -> bool {
        self.claimant(route_id).is_some()
    }

    /// The seat of the player claiming this route, if any.
    #[inline]
    pub fn claimant(&self, route_id: RouteId) -> Option<usize> {
        self.claimants.get(route_id.0).copied().flatten()
    }

    /// Marks the route as claimed by `player`.
    ///
    /// Legality must have been verified beforehand.
    pub fn claim(&mut self, route_id: RouteId, player: usize) {
        debug_assert!(!self.is_claimed(route_id), "route {route_id} claimed twice");
        self.claimants[route_id.0] = Some(player);
    }

    /// All routes having `city` as an endpoint, in board order.
    pub fn incident_routes<'a>(
        &'a self,
        city: &City,
    ) -> impl Iterator<Item = (RouteId, &'a Route)> + 'a {
        self.routes_by_city
            .get(city)
            .into_iter()
            .flatten()
            .map(move |route_id| (*route_id, &self.routes[route_id.0]))
    }

    /// Finds the first unclaimed route from `start` to `end` whose color is exactly `color`.
    ///
    /// Routes are searched in board order, amongst those incident to `start`.
    ///
    /// # Example
    /// ```
    /// use ttr_rules::city::City;
    /// use ttr_rules::color::Color;
    /// use ttr_rules::ledger::RouteLedger;
    /// use ttr_rules::route::{Route, RouteId};
    ///
    /// let mut ledger = RouteLedger::new(vec![
    ///     Route::new("Chicago", "Pittsburgh", 3, Color::Black),
    ///     Route::new("Chicago", "Pittsburgh", 3, Color::Orange),
    /// ]);
    /// let (chicago, pittsburgh) = (City::from("Chicago"), City::from("Pittsburgh"));
    ///
    /// assert_eq!(ledger.find_unclaimed(&pittsburgh, &chicago, Color::Orange), Some(RouteId(1)));
    ///
    /// ledger.claim(RouteId(1), 0);
    /// assert_eq!(ledger.find_unclaimed(&pittsburgh, &chicago, Color::Orange), None);
    /// ```
    pub fn find_unclaimed(&self, start: &City, end: &City, color: Color) -> Option<RouteId> {
        self.incident_routes(start)
            .find(|(route_id, route)| {
                route.connects(start, end) && route.color == color && !self.is_claimed(*route_id)
            })
            .map(|(route_id, _)| route_id)
    }

    /// Every route with its claimant, in board order.
    pub fn iter(&self) -> impl Iterator<Item = (RouteId, &Route, Option<usize>)> {
        self.routes
            .iter()
            .zip(&self.claimants)
            .enumerate()
            .map(|(index, (route, claimant))| (RouteId(index), route, *claimant))
    }

    /// Routes that can still be claimed.
    pub fn unclaimed_routes(&self) -> impl Iterator<Item = (RouteId, &Route)> {
        self.iter()
            .filter(|(_, _, claimant)| claimant.is_none())
            .map(|(route_id, route, _)| (route_id, route))
    }

    /// Routes claimed by the given player.
    pub fn routes_claimed_by(&self, player: usize) -> impl Iterator<Item = (RouteId, &Route)> {
        self.iter()
            .filter(move |(_, _, claimant)| *claimant == Some(player))
            .map(|(route_id, route, _)| (route_id, route))
    }
}
