pub mod fit {
    pub mod boundarycondition;
    pub mod coefficientpair;
    pub mod coefficientsolver;
}

pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod shiftedquadratic;
    }

    pub mod quadrature {
        pub mod adaptivequadrature;
        pub mod gausskronrod;
    }
}

pub mod pricing {
    pub mod mintcost;
}

pub mod report {
    pub mod curveplot;
}
