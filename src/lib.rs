pub mod configuration;

pub mod input {
    pub mod inputerror;
    pub mod samplereader;
}

pub mod math {
    pub mod quadrature {
        pub mod quadratureerror;
        pub mod sampleset;
        pub mod quadraturerule;
        pub mod rectanglerule;
        pub mod trapezoidalrule;
        pub mod simpsonrule;
        pub mod newtoncotesrule;
        pub mod quadratureengine;
    }
}

pub mod report {
    pub mod numberformat;
    pub mod outputstyle;
    pub mod integralreport;
}
