/*!
# Functions

Function names are not reserved words; a variable can't use one
because the function always wins. Functions that take no arguments
may be written with or without the parentheses.
*/

pub mod ABS {
    /*!
    ## `ABS(X)` Returns the absolute value of X.
    ```text
    PRINT ABS(-0.125)
    0.125
    ```
    */
}

pub mod COS {
    /*!
    ## `COS(X)` Returns the cosine of X in radians.
    ```text
    PRINT COS(0)
    1
    ```
    */
}

pub mod DEG {
    /*!
    ## `DEG(X)` Converts X radians to degrees.
    */
}

pub mod HYPOT2 {
    /*!
    ## `HYPOT2(X, Y)` Returns the length of the vector (X, Y).
    ```text
    PRINT HYPOT2(3, 4)
    5
    ```
    */
}

pub mod HYPOT3 {
    /*!
    ## `HYPOT3(X, Y, Z)` Returns the length of the vector (X, Y, Z).
    ```text
    PRINT HYPOT3(2, 3, 6)
    7
    ```
    */
}

pub mod IIF {
    /*!
    ## `IIF(C, X, Y)` Returns X if C is not zero, otherwise Y.
    Both X and Y are evaluated.
    ```text
    PRINT IIF(1>2, 10, 20)
    20
    ```
    */
}

pub mod INT {
    /*!
    ## `INT(X)` Drops the fractional part of X.
    Rounds toward zero.
    ```text
    PRINT INT(-2.7)
    -2
    ```
    */
}

pub mod MAX {
    /*!
    ## `MAX(X, Y)` Returns the larger of X and Y.
    */
}

pub mod MIN {
    /*!
    ## `MIN(X, Y)` Returns the smaller of X and Y.
    */
}

pub mod MOD {
    /*!
    ## `MOD(X, Y)` Returns the remainder of X divided by Y.
    Both arguments are truncated to integers first. The result has
    the sign of X. `MOD(X, 0)` is a `Division by zero` error.
    ```text
    PRINT MOD(-7, 3)
    -1
    ```
    */
}

pub mod PI {
    /*!
    ## `PI` Returns 3.141592653589793.
    */
}

pub mod RAD {
    /*!
    ## `RAD(X)` Converts X degrees to radians.
    */
}

pub mod RND {
    /*!
    ## `RND` Returns a random number from 0 up to but not including 1.
    See `RANDOMIZE`.
    */
}

pub mod SIN {
    /*!
    ## `SIN(X)` Returns the sine of X in radians.
    */
}

pub mod SQR {
    /*!
    ## `SQR(X)` Returns the square root of X.
    ```text
    PRINT SQR(2)
    1.4142135623730951
    ```
    */
}

pub mod TIMER {
    /*!
    ## `TIMER` Returns the seconds since 1970-01-01 UTC, with fractions.
    */
}
