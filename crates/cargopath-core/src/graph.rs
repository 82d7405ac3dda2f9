//! # Transition Graph
//!
//! The adjacency table of legal transitions between canonical statuses.
//! One row per status, realized as an exhaustive `match` so the graph is
//! total over the vocabulary by construction: a new variant will not
//! compile until it gets a row, even an empty one.
//!
//! The graph encodes the physical journey: origin ops feed the rail,
//! feeder, and ocean legs; transshipment loops back into arrival; the
//! hold statuses branch off the destination flow and re-enter via release;
//! the warning advisories point back at the milestones they predict.
//! `Unknown` may lead into the happy-path starting statuses so that a
//! single unmapped carrier event degrades the path instead of invalidating
//! everything after it. `Completed` is terminal and has the empty row.

use crate::status::CanonicalStatus;

use CanonicalStatus::*;

/// Legal successor statuses of `status`.
///
/// Total over the vocabulary; the terminal status returns an empty slice.
pub fn successors(status: CanonicalStatus) -> &'static [CanonicalStatus] {
    match status {
        NotShipped => &[Planned, EmptyPickedUp, ContainerStuffed, GateIn],
        Planned => &[EmptyPickedUp, ContainerStuffed, GateIn],

        EmptyPickedUp => &[ContainerStuffed, GateIn, RailLoaded, FeederLoaded, Hold],
        ContainerStuffed => &[GateIn, RailLoaded, FeederLoaded, Loaded, Hold],
        GateIn => &[RailLoaded, FeederLoaded, Loaded, Hold],

        RailLoaded => &[RailDeparted, Hold],
        RailDeparted => &[RailArrived, Delayed, Hold],
        RailArrived => &[RailDischarged, Loaded, Delayed, Hold],
        RailDischarged => &[GateIn, Loaded, Hold],

        FeederLoaded => &[FeederDeparted, Hold],
        FeederDeparted => &[FeederArrived, Delayed, Hold],
        FeederArrived => &[FeederDischarged, Loaded, Delayed, Hold],
        FeederDischarged => &[GateIn, Loaded, Hold],

        Loaded => &[Departed, Hold],
        Departed => &[Sailing, TransitArrived, Arrived, Delayed, Hold],
        Sailing => &[TransitArrived, Arrived, Berthed, Delayed, Congestion, Hold],

        TransitArrived => &[TransitBerthed, TransitDischarged, Arrived, Delayed, Hold],
        TransitBerthed => &[TransitDischarged, TransitLoaded, Hold],
        TransitDischarged => &[TransitLoaded, Hold],
        TransitLoaded => &[TransitDeparted, Hold],
        TransitDeparted => &[Arrived, Delayed, Hold],

        Arrived => &[Berthed, Discharged, Available, Delayed, Hold],
        Berthed => &[Discharged, Hold],
        Discharged => &[
            Available,
            GateOut,
            CustomsHold,
            CarrierHold,
            TerminalHold,
            Hold,
        ],
        Available => &[
            InTransitToDest,
            GateOut,
            CustomsHold,
            CarrierHold,
            TerminalHold,
            ChargesHold,
            Detention,
            Hold,
        ],

        InTransitToDest => &[DeliveryArrived, Stripped, Delayed, Hold],
        GateOut => &[InTransitToDest, DeliveryArrived, Stripped, Delayed, Hold],
        DeliveryArrived => &[Stripped, ReturnedEmpty, Hold],
        Stripped => &[ReturnedEmpty, Completed],
        ReturnedEmpty => &[Completed],

        Completed => &[],

        CustomsHold => &[Available, GateOut, Dumped],
        CarrierHold => &[Available, GateOut, Dumped],
        TerminalHold => &[Available, GateOut, Dumped],
        ChargesHold => &[Available, GateOut, Dumped],
        Hold => &[
            GateIn, RailLoaded, FeederLoaded, Loaded, Departed, Arrived, Available, GateOut,
            Dumped,
        ],
        Dumped => &[
            RailLoaded,
            FeederLoaded,
            Loaded,
            GateOut,
            ReturnedEmpty,
            Completed,
        ],

        Delayed => &[
            RailArrived,
            FeederArrived,
            Arrived,
            Berthed,
            Discharged,
            Available,
            GateOut,
            DeliveryArrived,
        ],
        Detention => &[GateOut, ReturnedEmpty],
        Overdue => &[ReturnedEmpty, Completed],
        Congestion => &[Arrived, Berthed, Delayed],

        Unknown => &[NotShipped, EmptyPickedUp, GateIn, Loaded, Departed],
    }
}

/// True iff `to` may legally follow `from`.
pub fn is_valid_transition(from: CanonicalStatus, to: CanonicalStatus) -> bool {
    successors(from).contains(&to)
}
