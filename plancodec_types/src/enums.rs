//! Closed enumerations carried as 16-bit enum fields (or, for [`DispatchMethod`], an int field).
//!
//! Discriminants are explicit so they stay fixed across builds of the tree producer and the decoder.

use num_derive::{FromPrimitive, ToPrimitive};

macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $default:ident = $dv:literal $(, $variant:ident = $v:literal)* $(,)? }) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(PartialEq, Eq, Hash, Clone, Copy, Default, FromPrimitive, ToPrimitive, Debug)]
        pub enum $name {
            #[default]
            $default = $dv,
            $($variant = $v,)*
        }
    };
}

wire_enum!(CmdType {
    Unknown = 0,
    Select = 1,
    Update = 2,
    Insert = 3,
    Delete = 4,
    Utility = 5,
    Nothing = 6,
});

wire_enum!(QuerySource {
    Original = 0,
    Parser = 1,
    InsteadRule = 2,
    QualInsteadRule = 3,
    NonInsteadRule = 4,
});

wire_enum!(PlanGenerator {
    Planner = 0,
    Optimizer = 1,
});

wire_enum!(JoinType {
    Inner = 0,
    Left = 1,
    Full = 2,
    Right = 3,
    In = 4,
    ReverseIn = 5,
    UniqueOuter = 6,
    UniqueInner = 7,
    LeftAntiSemi = 8,
});

wire_enum!(AggStrategy {
    Plain = 0,
    Sorted = 1,
    Hashed = 2,
});

wire_enum!(SetOpCmd {
    Intersect = 0,
    IntersectAll = 1,
    Except = 2,
    ExceptAll = 3,
});

wire_enum!(ShareType {
    NotShared = 0,
    MaterialXslice = 1,
    Material = 2,
    SortXslice = 3,
    Sort = 4,
});

wire_enum!(MotionType {
    Hash = 0,
    FixedRedistribute = 1,
    Explicit = 2,
});

wire_enum!(ScanDirection {
    Forward = 1,
    Backward = -1,
    NoMovement = 0,
});

wire_enum!(ParamKind {
    Extern = 0,
    Exec = 1,
    Sublink = 2,
});

wire_enum!(AggStage {
    Normal = 0,
    Partial = 1,
    Intermediate = 2,
    Final = 3,
});

wire_enum!(CoercionForm {
    ExplicitCall = 0,
    ExplicitCast = 1,
    ImplicitCast = 2,
    DontCare = 3,
});

wire_enum!(BoolExprType {
    And = 0,
    Or = 1,
    Not = 2,
});

wire_enum!(SubLinkType {
    Exists = 0,
    All = 1,
    Any = 2,
    RowCompare = 3,
    Expr = 4,
    Array = 5,
    Cte = 6,
    NotExists = 7,
});

wire_enum!(NullTestType {
    IsNull = 0,
    IsNotNull = 1,
});

wire_enum!(FlowType {
    Undefined = 0,
    Singleton = 1,
    Replicated = 2,
    Partitioned = 3,
});

wire_enum!(Movement {
    None = 0,
    FocusQe = 1,
    FocusQd = 2,
    Hash = 3,
    Broadcast = 4,
    Explicit = 5,
});

wire_enum!(LocusType {
    Null = 0,
    Entry = 1,
    SingleQd = 2,
    General = 3,
    Replicated = 4,
    Hashed = 5,
    Strewn = 6,
});

wire_enum!(GangType {
    Unallocated = 0,
    EntrydbReader = 1,
    SingletonReader = 2,
    PrimaryReader = 3,
    PrimaryWriter = 4,
});

wire_enum!(RteKind {
    Relation = 0,
    Subquery = 1,
    Join = 2,
    Special = 3,
    Function = 4,
    TableFunction = 5,
    Values = 6,
    Cte = 7,
    Void = 8,
});

wire_enum!(AExprKind {
    Op = 0,
    And = 1,
    Or = 2,
    Not = 3,
    OpAny = 4,
    OpAll = 5,
    Distinct = 6,
    NullIf = 7,
    Of = 8,
    In = 9,
});

wire_enum!(ConstrType {
    Null = 0,
    NotNull = 1,
    Default = 2,
    Check = 3,
    Primary = 4,
    Unique = 5,
    AttrDeferrable = 6,
    AttrNotDeferrable = 7,
    AttrDeferred = 8,
    AttrImmediate = 9,
});

wire_enum!(OnCommitAction {
    Noop = 0,
    PreserveRows = 1,
    DeleteRows = 2,
    Drop = 3,
});

wire_enum!(DropBehavior {
    Restrict = 0,
    Cascade = 1,
});

wire_enum!(DefElemAction {
    Unspec = 0,
    Set = 1,
    Add = 2,
    Drop = 3,
});

wire_enum!(
    /// How a plan is dispatched to workers. Emitted as an int field, not an enum field.
    DispatchMethod {
        Undetermined = 0,
        Sequential = 1,
        Parallel = 2,
    }
);
