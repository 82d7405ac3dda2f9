//! # Built-In Carrier Code Tables
//!
//! The event-code vocabularies of the three carriers the system ships with,
//! as const data. Each entry maps one raw carrier code to its canonical
//! status; the warning tables map predictive advisory codes, which reuse
//! the base code with a `W` prefix in the Feituo feed.
//!
//! Adding a carrier means adding one table here (or registering one at
//! runtime via [`crate::codebook::CodeBook::register`]); the state machine
//! is never touched.

use cargopath_core::CanonicalStatus;

use CanonicalStatus::*;

/// Feituo feed: the richest vocabulary, covering rail and feeder legs,
/// per-authority holds, and release events.
pub(crate) const FEITUO_EVENTS: &[(&str, CanonicalStatus)] = &[
    // Planning / origin ops
    ("STSP", EmptyPickedUp),
    ("STUF", ContainerStuffed),
    ("GITM", ContainerStuffed),
    ("PRLD", ContainerStuffed),
    ("GTIN", GateIn),
    // Rail leg
    ("IRLB", RailLoaded),
    ("IRDP", RailDeparted),
    ("IRAR", RailArrived),
    ("IRDS", RailDischarged),
    // Feeder leg
    ("FDLB", FeederLoaded),
    ("FDDP", FeederDeparted),
    ("FDBA", FeederArrived),
    ("FDDC", FeederDischarged),
    // Ocean leg
    ("LOBD", Loaded),
    ("DLPT", Departed),
    ("SAIL", Sailing),
    // Transshipment
    ("TSBA", TransitArrived),
    ("TSCA", TransitBerthed),
    ("TSDC", TransitDischarged),
    ("TSLB", TransitLoaded),
    ("TSDP", TransitDeparted),
    // Destination port
    ("BDAR", Arrived),
    ("POCA", Available),
    ("DSCH", Discharged),
    ("PCAB", Available),
    // Inland delivery
    ("STCS", InTransitToDest),
    ("GTOT", GateOut),
    ("STRP", Stripped),
    ("FETA", DeliveryArrived),
    ("RCVE", DeliveryArrived),
    ("RTNE", ReturnedEmpty),
    // Holds and releases (releases report the container available again)
    ("CUIP", CustomsHold),
    ("PASS", Available),
    ("SRHD", CarrierHold),
    ("SRRS", Available),
    ("TMHD", TerminalHold),
    ("TMPS", Available),
    ("SRSD", ChargesHold),
    ("SRSE", Available),
    // Exceptions
    ("DUMP", Dumped),
    ("STLH", Hold),
];

/// Feituo advisory codes. The same physical milestone code with a `W`
/// prefix reports a predicted slippage, not a confirmed occurrence, so it
/// maps into the warning statuses instead of the milestone ones.
pub(crate) const FEITUO_WARNINGS: &[(&str, CanonicalStatus)] = &[
    ("WGITM", Delayed),
    ("WDLPT", Delayed),
    ("WDUMP", Dumped),
    ("WTSBA", Delayed),
    ("WPCGI", Detention),
    ("WBDAR", Delayed),
    ("WGTOT", Detention),
    ("WETA", Delayed),
    ("WSTCS", Overdue),
    ("WRCVE", Overdue),
];

/// Maersk feed. No rail/feeder events; advisory codes are not part of the
/// feed, so the warning table is empty.
pub(crate) const MAERSK_EVENTS: &[(&str, CanonicalStatus)] = &[
    ("STSP", EmptyPickedUp),
    ("STUF", ContainerStuffed),
    ("GTIN", GateIn),
    ("LOBD", Loaded),
    ("DLPT", Departed),
    ("RDSI", Sailing),
    ("TSBA", TransitArrived),
    ("TSCA", TransitBerthed),
    ("TSAD", TransitDeparted),
    ("ARVD", Arrived),
    ("BDAR", Arrived),
    ("DSCH", Discharged),
    ("AVLB", Available),
    ("PCAB", Available),
    ("GTOT", GateOut),
    ("STCS", InTransitToDest),
    ("DLVR", DeliveryArrived),
    ("STRP", Stripped),
    ("FETA", DeliveryArrived),
    ("RCVE", DeliveryArrived),
    ("RTNE", ReturnedEmpty),
    ("CUIP", CustomsHold),
    ("PASS", Available),
];

/// COSCO feed: the leanest vocabulary of the three.
pub(crate) const COSCO_EVENTS: &[(&str, CanonicalStatus)] = &[
    ("STSP", EmptyPickedUp),
    ("STUF", ContainerStuffed),
    ("GTIN", GateIn),
    ("LOBD", Loaded),
    ("DLPT", Departed),
    ("SAIL", Sailing),
    ("TSBA", TransitArrived),
    ("TSAD", TransitDeparted),
    ("ARVD", Arrived),
    ("DSCH", Discharged),
    ("AVLB", Available),
    ("GTOT", GateOut),
    ("STRP", Stripped),
    ("RTNE", ReturnedEmpty),
];
