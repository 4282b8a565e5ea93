/*!
# `FOR <variable>=x TO y [STEP z]`
Where x, y, and z are expressions.
## Purpose
Counts the variable from x to y, running the lines up to the
matching `NEXT` once for every value.

## Remarks
The variable is set to x and the body runs. Each `NEXT` adds z,
or 1 without a `STEP`, and goes around again unless the variable has
passed y. Counting down needs a negative step; the loop then ends once
the variable is below y. A step of zero is an `Infinite loop` error.

x, y and z are evaluated once, in that order, when the `FOR` runs.
The body always runs at least once, even when x is already past y.

## Example
```text
10 FOR X=1 TO 2
20 FOR Y=6 TO 5 STEP -1
30 PRINT X," ",Y
40 NEXT Y
50 NEXT X
RUN
1 6
1 5
2 6
2 5
```

*/
